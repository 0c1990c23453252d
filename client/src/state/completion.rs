//! Profile-completion state for the signed-in candidate.
//!
//! DESIGN
//! ======
//! Kept apart from `AuthState` because it is derived from the backend, never
//! persisted, and recomputed whenever the profile changes.

#[cfg(test)]
#[path = "completion_test.rs"]
mod completion_test;

use ats_core::completion::CompletionOutcome;
use ats_core::types::ProfileCompletionStatus;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompletionState {
    pub status: ProfileCompletionStatus,
    /// A lookup is in flight.
    pub checking: bool,
    /// User the current `status` belongs to.
    pub user_id: Option<String>,
}

impl CompletionState {
    /// Whether a check for `user_id` should be started now.
    pub fn needs_check(&self, user_id: &str) -> bool {
        !self.checking && (self.status.is_complete.is_none() || self.user_id.as_deref() != Some(user_id))
    }

    pub fn begin(&mut self, user_id: &str) {
        if self.user_id.as_deref() != Some(user_id) {
            self.status = ProfileCompletionStatus::UNCHECKED;
        }
        self.user_id = Some(user_id.to_owned());
        self.checking = true;
    }

    /// Record the outcome of a check started for `user_id`. Outcomes for any
    /// other user arrive after a sign-out and are dropped.
    pub fn finish(&mut self, user_id: &str, outcome: &CompletionOutcome) {
        if self.user_id.as_deref() != Some(user_id) {
            return;
        }
        self.status = outcome.status();
        self.checking = false;
    }

    /// Forget everything, e.g. on logout.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
