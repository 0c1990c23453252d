//! Colored pill for workflow statuses.

#[cfg(test)]
#[path = "status_badge_test.rs"]
mod status_badge_test;

use ats_core::types::{ApplicationStatus, DocumentStatus, InterviewStatus, OfferStatus};
use leptos::prelude::*;

/// Visual tone of a badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Progress,
    Good,
    Bad,
}

impl Tone {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Neutral => "badge badge--neutral",
            Self::Progress => "badge badge--progress",
            Self::Good => "badge badge--good",
            Self::Bad => "badge badge--bad",
        }
    }
}

pub fn application_tone(status: ApplicationStatus) -> Tone {
    match status {
        ApplicationStatus::Applied => Tone::Neutral,
        ApplicationStatus::Screening | ApplicationStatus::Interviewing | ApplicationStatus::Offered => Tone::Progress,
        ApplicationStatus::Hired => Tone::Good,
        ApplicationStatus::Rejected | ApplicationStatus::Withdrawn => Tone::Bad,
    }
}

pub fn interview_tone(status: InterviewStatus) -> Tone {
    match status {
        InterviewStatus::Scheduled => Tone::Progress,
        InterviewStatus::Completed => Tone::Good,
        InterviewStatus::Cancelled => Tone::Bad,
    }
}

pub fn offer_tone(status: OfferStatus) -> Tone {
    match status {
        OfferStatus::Pending => Tone::Progress,
        OfferStatus::Accepted => Tone::Good,
        OfferStatus::Declined | OfferStatus::Withdrawn => Tone::Bad,
    }
}

pub fn document_tone(status: DocumentStatus) -> Tone {
    match status {
        DocumentStatus::Pending => Tone::Neutral,
        DocumentStatus::Verified => Tone::Good,
        DocumentStatus::Rejected => Tone::Bad,
    }
}

#[component]
pub fn StatusBadge(label: &'static str, tone: Tone) -> impl IntoView {
    view! { <span class=tone.css_class()>{label}</span> }
}
