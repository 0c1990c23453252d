//! Route-guard evaluation.
//!
//! Each guard is a pure function of the [`Session`] returning a
//! [`GuardDecision`]; performing the redirect is left to the view layer.
//! While the session is loading every guard answers `Loading`, so nothing
//! redirects before storage has been read.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::store::Session;
use crate::types::UserType;

/// Where a guard sends the visitor instead of the requested page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Login,
    Dashboard,
    AccessDenied,
}

impl Target {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
            Self::AccessDenied => "/access-denied",
        }
    }
}

/// Outcome of evaluating a guard once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not settled yet; render a neutral placeholder.
    Loading,
    Allow,
    Redirect(Target),
}

/// Pages that require a signed-in user.
#[must_use]
pub fn evaluate_protected(session: &Session) -> GuardDecision {
    if session.is_loading {
        GuardDecision::Loading
    } else if session.is_authenticated() {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(Target::Login)
    }
}

/// Pages only meant for signed-out visitors (login, register).
#[must_use]
pub fn evaluate_public_only(session: &Session) -> GuardDecision {
    if session.is_loading {
        GuardDecision::Loading
    } else if session.is_authenticated() {
        GuardDecision::Redirect(Target::Dashboard)
    } else {
        GuardDecision::Allow
    }
}

/// Pages restricted to one role. The protected check runs first.
#[must_use]
pub fn evaluate_role(session: &Session, required: UserType) -> GuardDecision {
    match evaluate_protected(session) {
        GuardDecision::Allow if session.user_type() == Some(required) => GuardDecision::Allow,
        GuardDecision::Allow => GuardDecision::Redirect(Target::AccessDenied),
        other => other,
    }
}

/// Landing route for a signed-in user of `user_type`.
#[must_use]
pub fn home_for(user_type: UserType) -> &'static str {
    match user_type {
        UserType::Candidate => "/dashboard",
        UserType::Employee => "/hr",
        UserType::Admin => "/admin",
    }
}
