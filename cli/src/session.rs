//! Guard checks for CLI commands.
//!
//! Commands run the same guard evaluation as the browser routes; a redirect
//! becomes an error telling the user what to do instead.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use ats_core::SessionStore;
use ats_core::guard::{GuardDecision, Target, evaluate_protected, evaluate_public_only, evaluate_role};
use ats_core::storage::Storage;
use ats_core::types::{UserRecord, UserType};

use crate::error::CliError;

/// Token and user of a signed-in session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub user: UserRecord,
}

fn credentials<S: Storage>(store: &SessionStore<S>) -> Result<Credentials, CliError> {
    let session = store.session();
    match (&session.token, &session.user) {
        (Some(token), Some(user)) => Ok(Credentials { token: token.clone(), user: user.clone() }),
        _ => Err(CliError::NotSignedIn),
    }
}

fn redirect_error<S: Storage>(store: &SessionStore<S>, target: Target, required: Option<UserType>) -> CliError {
    match (target, required) {
        (Target::Login, _) => CliError::NotSignedIn,
        (Target::Dashboard, _) => CliError::AlreadySignedIn {
            email: store.session().user.as_ref().map(|u| u.email.clone()).unwrap_or_default(),
        },
        (Target::AccessDenied, Some(required)) => CliError::AccessDenied { required },
        (Target::AccessDenied, None) => CliError::NotSignedIn,
    }
}

/// Commands that need a signed-in user.
///
/// # Errors
///
/// Returns [`CliError::NotSignedIn`] for anonymous sessions.
pub fn require_signed_in<S: Storage>(store: &SessionStore<S>) -> Result<Credentials, CliError> {
    match evaluate_protected(store.session()) {
        GuardDecision::Allow => credentials(store),
        GuardDecision::Redirect(target) => Err(redirect_error(store, target, None)),
        GuardDecision::Loading => Err(CliError::NotSignedIn),
    }
}

/// Commands only for signed-out users (login, register).
///
/// # Errors
///
/// Returns [`CliError::AlreadySignedIn`] when a session exists.
pub fn require_signed_out<S: Storage>(store: &SessionStore<S>) -> Result<(), CliError> {
    match evaluate_public_only(store.session()) {
        GuardDecision::Allow | GuardDecision::Loading => Ok(()),
        GuardDecision::Redirect(target) => Err(redirect_error(store, target, None)),
    }
}

/// Commands reserved for `role`.
///
/// # Errors
///
/// Returns [`CliError::NotSignedIn`] or [`CliError::AccessDenied`].
pub fn require_role<S: Storage>(store: &SessionStore<S>, role: UserType) -> Result<Credentials, CliError> {
    match evaluate_role(store.session(), role) {
        GuardDecision::Allow => credentials(store),
        GuardDecision::Redirect(target) => Err(redirect_error(store, target, Some(role))),
        GuardDecision::Loading => Err(CliError::NotSignedIn),
    }
}
