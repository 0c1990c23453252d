//! Wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Identifiers are accepted
//! as either JSON strings or integers and normalized to `String`, since the
//! backend is not consistent about which it sends. Status enums are plain
//! values: the backend decides which transitions are legal.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// IDENTITY
// =============================================================================

/// Role of an account, deciding which workspace it lands in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum UserType {
    Candidate,
    Employee,
    Admin,
}

impl UserType {
    pub const ALL: [Self; 3] = [Self::Candidate, Self::Employee, Self::Admin];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Candidate => "candidate",
            Self::Employee => "employee",
            Self::Admin => "admin",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Candidate => "Candidate",
            Self::Employee => "HR / Employee",
            Self::Admin => "Administrator",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a role string the client does not know.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown user type `{0}`")]
pub struct UnknownUserType(pub String);

impl FromStr for UserType {
    type Err = UnknownUserType;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "candidate" => Ok(Self::Candidate),
            "employee" | "hr" => Ok(Self::Employee),
            "admin" | "administrator" => Ok(Self::Admin),
            _ => Err(UnknownUserType(raw.to_owned())),
        }
    }
}

impl TryFrom<String> for UserType {
    type Error = UnknownUserType;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<UserType> for &'static str {
    fn from(value: UserType) -> Self {
        value.as_str()
    }
}

/// The signed-in account, as returned by `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(deserialize_with = "deserialize_id")]
    pub user_id: String,
    #[serde(default)]
    pub email: String,
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub user_type: UserType,
}

impl UserRecord {
    /// "First Last", or whichever half is present.
    #[must_use]
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() { self.email.clone() } else { full.to_owned() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserRecord,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub user_type: UserType,
}

// =============================================================================
// PROFILE
// =============================================================================

/// Body of `GET /Candidate/{userId}/isComplete`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCompletion {
    pub is_complete: bool,
}

/// Completion as known by the UI; `None` means "not yet checked".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProfileCompletionStatus {
    pub is_complete: Option<bool>,
}

impl ProfileCompletionStatus {
    pub const UNCHECKED: Self = Self { is_complete: None };

    #[must_use]
    pub fn known(is_complete: bool) -> Self {
        Self { is_complete: Some(is_complete) }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateProfile {
    #[serde(deserialize_with = "deserialize_id")]
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub city: String,
    pub education: String,
    pub experience_years: Option<u32>,
    pub skills: Vec<String>,
    #[serde(rename = "linkedInUrl")]
    pub linkedin_url: Option<String>,
    pub summary: Option<String>,
}

impl CandidateProfile {
    /// Empty profile seeded with what the session already knows.
    #[must_use]
    pub fn seeded_from(user: &UserRecord) -> Self {
        Self {
            user_id: user.user_id.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            phone_number: user.phone_number.clone().unwrap_or_default(),
            ..Self::default()
        }
    }
}

// =============================================================================
// JOBS & APPLICATIONS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(alias = "id", deserialize_with = "deserialize_id")]
    pub job_id: String,
    pub title: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub employment_type: String,
    /// Markdown body.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub salary_min: Option<f64>,
    #[serde(default)]
    pub salary_max: Option<f64>,
    #[serde(default = "default_true")]
    pub is_open: bool,
    #[serde(default)]
    pub posted_at: Option<String>,
}

impl Job {
    /// Case-insensitive match against title, department, and location.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        [&self.title, &self.department, &self.location]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }

    /// Human readable salary band, if any bound is known.
    #[must_use]
    pub fn salary_range(&self) -> Option<String> {
        match (self.salary_min, self.salary_max) {
            (Some(min), Some(max)) => Some(format!("{min:.0} – {max:.0}")),
            (Some(min), None) => Some(format!("from {min:.0}")),
            (None, Some(max)) => Some(format!("up to {max:.0}")),
            (None, None) => None,
        }
    }
}

/// Create/update body for `POST /Jobs` and `PUT /Jobs/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    pub title: String,
    pub department: String,
    pub location: String,
    pub employment_type: String,
    pub description: String,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub is_open: bool,
}

impl From<&Job> for JobDraft {
    fn from(job: &Job) -> Self {
        Self {
            title: job.title.clone(),
            department: job.department.clone(),
            location: job.location.clone(),
            employment_type: job.employment_type.clone(),
            description: job.description.clone(),
            salary_min: job.salary_min,
            salary_max: job.salary_max,
            is_open: job.is_open,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Applied,
    Screening,
    Interviewing,
    Offered,
    Hired,
    Rejected,
    Withdrawn,
}

impl ApplicationStatus {
    pub const ALL: [Self; 7] = [
        Self::Applied,
        Self::Screening,
        Self::Interviewing,
        Self::Offered,
        Self::Hired,
        Self::Rejected,
        Self::Withdrawn,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Screening => "Screening",
            Self::Interviewing => "Interviewing",
            Self::Offered => "Offered",
            Self::Hired => "Hired",
            Self::Rejected => "Rejected",
            Self::Withdrawn => "Withdrawn",
        }
    }

    /// Whether the candidate may still withdraw.
    #[must_use]
    pub fn is_active(self) -> bool {
        !matches!(self, Self::Hired | Self::Rejected | Self::Withdrawn)
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| format!("unknown application status `{raw}`"))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(alias = "id", deserialize_with = "deserialize_id")]
    pub application_id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub job_id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub candidate_id: String,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub candidate_name: Option<String>,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub applied_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyRequest {
    pub job_id: String,
    pub candidate_id: String,
}

/// Body for every "flip the status" endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate<T> {
    pub status: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl<T> StatusUpdate<T> {
    pub fn new(status: T) -> Self {
        Self { status, note: None }
    }
}

// =============================================================================
// INTERVIEWS & OFFERS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterviewStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl InterviewStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interview {
    #[serde(alias = "id", deserialize_with = "deserialize_id")]
    pub interview_id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub application_id: String,
    #[serde(default)]
    pub job_title: Option<String>,
    pub scheduled_at: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub interviewer: Option<String>,
    pub status: InterviewStatus,
    #[serde(default)]
    pub feedback: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewDraft {
    pub application_id: String,
    pub candidate_id: String,
    pub scheduled_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interviewer: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OfferStatus {
    Pending,
    Accepted,
    Declined,
    Withdrawn,
}

impl OfferStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::Declined => "Declined",
            Self::Withdrawn => "Withdrawn",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    #[serde(alias = "id", deserialize_with = "deserialize_id")]
    pub offer_id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub application_id: String,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub salary: Option<f64>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub status: OfferStatus,
}

impl Offer {
    /// Only pending offers accept a candidate response.
    #[must_use]
    pub fn awaiting_response(&self) -> bool {
        self.status == OfferStatus::Pending
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferDraft {
    pub application_id: String,
    pub candidate_id: String,
    pub salary: Option<f64>,
    pub start_date: Option<String>,
    pub notes: Option<String>,
}

// =============================================================================
// DOCUMENTS
// =============================================================================

/// Document categories offered in the upload form.
pub const DOCUMENT_TYPES: [&str; 5] = ["Resume", "ID Proof", "Degree Certificate", "Experience Letter", "Other"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentStatus {
    Pending,
    Verified,
    Rejected,
}

impl DocumentStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending review",
            Self::Verified => "Verified",
            Self::Rejected => "Rejected",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(alias = "id", deserialize_with = "deserialize_id")]
    pub document_id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub candidate_id: String,
    #[serde(default)]
    pub candidate_name: Option<String>,
    pub document_type: String,
    pub file_name: String,
    #[serde(default)]
    pub file_url: Option<String>,
    pub status: DocumentStatus,
    #[serde(default)]
    pub uploaded_at: Option<String>,
    #[serde(default)]
    pub reviewer_note: Option<String>,
}

// =============================================================================
// ADMIN & ANALYTICS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(alias = "userId", alias = "id", deserialize_with = "deserialize_id")]
    pub employee_id: String,
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    pub user_type: UserType,
    #[serde(default)]
    pub department: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub user_type: UserType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleUpdate {
    pub user_type: UserType,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyticsSummary {
    pub total_jobs: u64,
    pub open_jobs: u64,
    pub total_applications: u64,
    pub applications_by_status: BTreeMap<String, u64>,
    pub total_hires: u64,
    pub offers_accepted: u64,
    pub offers_declined: u64,
    pub average_days_to_hire: Option<f64>,
}

impl AnalyticsSummary {
    /// Share of answered offers that were accepted, as a percentage.
    #[must_use]
    pub fn offer_acceptance_rate(&self) -> Option<f64> {
        let answered = self.offers_accepted + self.offers_declined;
        if answered == 0 {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let rate = self.offers_accepted as f64 * 100.0 / answered as f64;
        Some(rate)
    }
}

// =============================================================================
// SERDE HELPERS
// =============================================================================

fn default_true() -> bool {
    true
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected string or integer id")),
    }
}
