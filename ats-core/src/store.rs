//! Session store: authentication state persisted to durable storage.
//!
//! DESIGN
//! ======
//! The store is an ordinary value generic over [`Storage`] rather than a
//! process-wide singleton, so the browser, the CLI, and tests each own their
//! own instance. Memory is only updated after storage accepted the change,
//! and anything unreadable in storage is wiped on `init` instead of being
//! surfaced as an error.
//!
//! LIFECYCLE
//! =========
//! `new` (loading) → `init` (authenticated or not, never loading) →
//! `login` / `logout` replace the session wholesale.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::error::StorageError;
use crate::storage::{Storage, TOKEN_KEY, USER_KEY};
use crate::types::{UserRecord, UserType};

/// Snapshot of the client-side session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserRecord>,
    pub is_loading: bool,
}

impl Default for Session {
    /// The pre-`init` state: nothing known yet, still loading.
    fn default() -> Self {
        Self { token: None, user: None, is_loading: true }
    }
}

impl Session {
    /// Settled, signed-out session.
    #[must_use]
    pub fn anonymous() -> Self {
        Self { token: None, user: None, is_loading: false }
    }

    #[must_use]
    pub fn authenticated(token: String, user: UserRecord) -> Self {
        Self { token: Some(token), user: Some(user), is_loading: false }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    #[must_use]
    pub fn user_type(&self) -> Option<UserType> {
        self.user.as_ref().map(|user| user.user_type)
    }

    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.user_id.as_str())
    }
}

/// Owns the session and keeps it in sync with durable storage.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
    session: Session,
}

impl<S: Storage> SessionStore<S> {
    /// Wrap `storage`; the session stays loading until [`Self::init`].
    pub fn new(storage: S) -> Self {
        Self { storage, session: Session::default() }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Bearer token for authenticated requests.
    pub fn bearer(&self) -> Option<&str> {
        self.session.token.as_deref()
    }

    /// Hydrate the session from storage.
    ///
    /// Missing or unparsable data wipes both keys and leaves the session
    /// signed out. Always finishes with `is_loading == false`.
    pub fn init(&mut self) -> &Session {
        self.session = match self.read_persisted() {
            Ok(Some((token, user))) => {
                tracing::debug!(user_id = %user.user_id, "session restored from storage");
                Session::authenticated(token, user)
            }
            Ok(None) => {
                self.clear_storage();
                Session::anonymous()
            }
            Err(reason) => {
                tracing::warn!(%reason, "discarding stored session");
                self.clear_storage();
                Session::anonymous()
            }
        };
        &self.session
    }

    /// Persist `token` and `user`, then mark the session authenticated.
    ///
    /// # Errors
    ///
    /// Returns the storage error if either write fails. The in-memory session
    /// is left untouched in that case.
    pub fn login(&mut self, token: String, user: UserRecord) -> Result<&Session, StorageError> {
        let serialized = serde_json::to_string(&user).map_err(|e| StorageError::Write {
            key: USER_KEY.to_owned(),
            reason: e.to_string(),
        })?;

        self.storage.set(TOKEN_KEY, &token)?;
        if let Err(err) = self.storage.set(USER_KEY, &serialized) {
            if let Err(cleanup) = self.storage.remove(TOKEN_KEY) {
                tracing::warn!(error = %cleanup, "failed to roll back token after user write failure");
            }
            return Err(err);
        }

        tracing::info!(user_id = %user.user_id, user_type = %user.user_type, "signed in");
        self.session = Session::authenticated(token, user);
        Ok(&self.session)
    }

    /// Clear storage and reset to a signed-out session. Never fails.
    pub fn logout(&mut self) -> &Session {
        self.clear_storage();
        self.session = Session::anonymous();
        tracing::info!("signed out");
        &self.session
    }

    fn read_persisted(&self) -> Result<Option<(String, UserRecord)>, String> {
        let token = self.storage.get(TOKEN_KEY).map_err(|e| e.to_string())?;
        let raw_user = self.storage.get(USER_KEY).map_err(|e| e.to_string())?;
        let (Some(token), Some(raw_user)) = (token, raw_user) else {
            return Ok(None);
        };
        if token.trim().is_empty() {
            return Err("stored token is empty".to_owned());
        }
        let user = serde_json::from_str::<UserRecord>(&raw_user).map_err(|e| format!("stored user is invalid: {e}"))?;
        Ok(Some((token, user)))
    }

    fn clear_storage(&mut self) {
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(err) = self.storage.remove(key) {
                tracing::warn!(key, error = %err, "failed to clear session key");
            }
        }
    }
}
