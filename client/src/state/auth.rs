//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once at the app root as `RwSignal<AuthState>`. Route guards read
//! the session from it; login and logout write through the wrapped
//! `SessionStore` so `localStorage` and memory never disagree.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use ats_core::storage::Storage;
use ats_core::types::{UserRecord, UserType};
use ats_core::{Session, SessionStore, StorageError};

use crate::util::storage::BrowserStorage;

/// Reactive wrapper around the session store.
#[derive(Clone, Debug)]
pub struct AuthState<S = BrowserStorage> {
    store: SessionStore<S>,
}

impl<S: Storage + Default> Default for AuthState<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: Storage> AuthState<S> {
    pub fn new(storage: S) -> Self {
        Self { store: SessionStore::new(storage) }
    }

    pub fn session(&self) -> &Session {
        self.store.session()
    }

    pub fn is_loading(&self) -> bool {
        self.session().is_loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_authenticated()
    }

    pub fn user(&self) -> Option<&UserRecord> {
        self.session().user.as_ref()
    }

    pub fn user_type(&self) -> Option<UserType> {
        self.session().user_type()
    }

    pub fn user_id(&self) -> Option<String> {
        self.session().user_id().map(str::to_owned)
    }

    /// Owned bearer token for handing to an async request.
    pub fn token(&self) -> Option<String> {
        self.store.bearer().map(str::to_owned)
    }

    /// Token and user id together, for candidate-scoped requests.
    pub fn credentials(&self) -> Option<(String, String)> {
        Some((self.token()?, self.user_id()?))
    }

    pub fn init(&mut self) {
        self.store.init();
    }

    /// # Errors
    ///
    /// Returns the storage error when `localStorage` rejects the write.
    pub fn login(&mut self, token: String, user: UserRecord) -> Result<(), StorageError> {
        self.store.login(token, user).map(|_| ())
    }

    pub fn logout(&mut self) {
        self.store.logout();
    }
}
