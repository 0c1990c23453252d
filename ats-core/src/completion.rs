//! Profile-completion gate for candidates.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend decides whether a candidate profile is complete. Until it says
//! so, job browsing, applications, interviews, and offers stay locked and the
//! candidate lands on the profile tab. The check itself never fails: every
//! outcome collapses into a boolean plus an optional warning for a toast.

#[cfg(test)]
#[path = "completion_test.rs"]
mod completion_test;

use std::future::Future;

use crate::error::ApiError;
use crate::types::{CandidateProfile, ProfileCompletion, ProfileCompletionStatus};

/// Result of one completion check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionOutcome {
    pub is_complete: bool,
    /// Message to surface to the user, set only for unexpected failures.
    pub warning: Option<String>,
}

impl CompletionOutcome {
    #[must_use]
    pub fn status(&self) -> ProfileCompletionStatus {
        ProfileCompletionStatus::known(self.is_complete)
    }
}

/// Collapse a lookup result into an outcome.
///
/// A 404 means the profile was never created, which is simply incomplete.
#[must_use]
pub fn resolve_completion(result: Result<ProfileCompletion, ApiError>) -> CompletionOutcome {
    match result {
        Ok(body) => CompletionOutcome { is_complete: body.is_complete, warning: None },
        Err(err) if err.is_not_found() => CompletionOutcome { is_complete: false, warning: None },
        Err(err) => {
            tracing::warn!(error = %err, "profile completion check failed");
            CompletionOutcome {
                is_complete: false,
                warning: Some(format!("Could not check profile completion: {}", err.user_message())),
            }
        }
    }
}

/// Run `lookup` for `user_id` and resolve its result.
pub async fn check_completion<F, Fut>(user_id: &str, lookup: F) -> CompletionOutcome
where
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<ProfileCompletion, ApiError>>,
{
    resolve_completion(lookup(user_id.to_owned()).await)
}

/// Required profile fields still empty, by display label.
#[must_use]
pub fn missing_required_fields(profile: &CandidateProfile) -> Vec<&'static str> {
    let text_fields = [
        ("First name", &profile.first_name),
        ("Last name", &profile.last_name),
        ("Email", &profile.email),
        ("Phone number", &profile.phone_number),
        ("Address", &profile.address),
        ("Education", &profile.education),
    ];
    let mut missing: Vec<&'static str> = text_fields
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
        .collect();
    if profile.skills.iter().all(|skill| skill.trim().is_empty()) {
        missing.push("Skills");
    }
    missing
}

// =============================================================================
// TAB GATING
// =============================================================================

/// Sections of the candidate dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CandidateTab {
    Profile,
    Jobs,
    Applications,
    Interviews,
    Offers,
    Documents,
}

impl CandidateTab {
    pub const ALL: [Self; 6] = [
        Self::Profile,
        Self::Jobs,
        Self::Applications,
        Self::Interviews,
        Self::Offers,
        Self::Documents,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Jobs => "Browse Jobs",
            Self::Applications => "My Applications",
            Self::Interviews => "Interviews",
            Self::Offers => "Offers",
            Self::Documents => "Documents",
        }
    }

    /// URL slug used in `?tab=`.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Jobs => "jobs",
            Self::Applications => "applications",
            Self::Interviews => "interviews",
            Self::Offers => "offers",
            Self::Documents => "documents",
        }
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.slug() == slug)
    }

    #[must_use]
    pub fn requires_complete_profile(self) -> bool {
        matches!(self, Self::Jobs | Self::Applications | Self::Interviews | Self::Offers)
    }
}

/// Whether a tab may be shown right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabAccess {
    /// Completion not known yet.
    Pending,
    Allowed,
    Locked,
}

#[must_use]
pub fn tab_access(tab: CandidateTab, status: ProfileCompletionStatus) -> TabAccess {
    if !tab.requires_complete_profile() {
        return TabAccess::Allowed;
    }
    match status.is_complete {
        None => TabAccess::Pending,
        Some(true) => TabAccess::Allowed,
        Some(false) => TabAccess::Locked,
    }
}

/// Tab a candidate lands on once completion is known.
#[must_use]
pub fn landing_tab(status: ProfileCompletionStatus) -> Option<CandidateTab> {
    status
        .is_complete
        .map(|complete| if complete { CandidateTab::Jobs } else { CandidateTab::Profile })
}

/// Tab to actually show when `requested` is asked for.
///
/// Locked tabs fall back to the profile editor; pending ones are kept so the
/// view can show a loading state.
#[must_use]
pub fn resolve_tab(requested: CandidateTab, status: ProfileCompletionStatus) -> CandidateTab {
    match tab_access(requested, status) {
        TabAccess::Locked => CandidateTab::Profile,
        TabAccess::Pending | TabAccess::Allowed => requested,
    }
}
