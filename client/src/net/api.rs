//! REST API helpers for communicating with the ATS backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, every URL built from
//! the single `ApiConfig` base and every authenticated call carrying a bearer
//! token. Server-side (SSR): the transport answers `ApiError::Unavailable`
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` and turn failures into toasts. Nothing
//! here retries, caches, or de-duplicates requests.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use ats_core::ApiError;
#[cfg(any(test, feature = "hydrate"))]
use ats_core::config::ApiConfig;
use ats_core::endpoints;
use ats_core::types::{
    AnalyticsSummary, Application, ApplicationStatus, ApplyRequest, CandidateProfile, Document, DocumentStatus,
    Employee, EmployeeDraft, Interview, InterviewDraft, Job, JobDraft, LoginRequest, LoginResponse, Offer,
    OfferDraft, OfferStatus, ProfileCompletion, RegisterRequest, RoleUpdate, StatusUpdate, UserType,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[cfg(any(test, feature = "hydrate"))]
fn api_config() -> ApiConfig {
    ApiConfig::from_build_env()
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Create the profile the first time, update it afterwards.
pub(crate) fn profile_save_target(user_id: &str, exists: bool) -> (Method, String) {
    if exists {
        (Method::Put, endpoints::candidate_profile(user_id))
    } else {
        (Method::Post, endpoints::CANDIDATES.to_owned())
    }
}

fn to_body<T: Serialize>(value: &T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[cfg(feature = "hydrate")]
async fn send(
    method: Method,
    path: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Result<gloo_net::http::Response, ApiError> {
    use gloo_net::http::Request;

    let url = api_config().url(path);
    let mut builder = match method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
        Method::Delete => Request::delete(&url),
    };
    if let Some(token) = token {
        builder = builder.header("Authorization", &bearer_header(token));
    }
    let sent = match body {
        Some(body) => {
            builder
                .json(&body)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
        }
        None => builder.send().await,
    };
    let resp = sent.map_err(|e| ApiError::Transport(e.to_string()))?;
    ensure_success(resp).await
}

#[cfg(feature = "hydrate")]
async fn ensure_success(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let text = resp.text().await.unwrap_or_default();
    Err(ApiError::from_response(status, &text))
}

async fn request<T: DeserializeOwned>(
    method: Method,
    path: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(method, path, token, body).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, token, body);
        Err(ApiError::Unavailable)
    }
}

/// Like [`request`] but ignores the response body.
async fn request_empty(method: Method, path: &str, token: Option<&str>, body: Option<Value>) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(method, path, token, body).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, token, body);
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// AUTH & PROFILE
// =============================================================================

/// `POST /auth/login`.
///
/// # Errors
///
/// Returns the backend's `{ message }` for rejected credentials.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let body = to_body(&LoginRequest { email: email.to_owned(), password: password.to_owned() })?;
    request(Method::Post, endpoints::LOGIN, None, Some(body)).await
}

/// `POST /auth/register`.
///
/// # Errors
///
/// Returns an error if registration is rejected (e.g. duplicate email).
pub async fn register(payload: &RegisterRequest) -> Result<(), ApiError> {
    request_empty(Method::Post, endpoints::REGISTER, None, Some(to_body(payload)?)).await
}

/// Best-effort `POST /auth/logout`; failures are only logged.
pub async fn logout(token: &str) {
    if let Err(err) = request_empty(Method::Post, endpoints::LOGOUT, Some(token), None).await {
        log::warn!("logout notification failed: {err}");
    }
}

/// `GET /Candidate/{userId}/isComplete`.
///
/// # Errors
///
/// Returns the raw error; `ats_core::completion` decides what a 404 means.
pub async fn fetch_completion(token: &str, user_id: &str) -> Result<ProfileCompletion, ApiError> {
    request(Method::Get, &endpoints::candidate_completion(user_id), Some(token), None).await
}

/// `GET /Candidate/{userId}`.
///
/// # Errors
///
/// Returns a 404 status error when the profile was never created.
pub async fn fetch_profile(token: &str, user_id: &str) -> Result<CandidateProfile, ApiError> {
    request(Method::Get, &endpoints::candidate_profile(user_id), Some(token), None).await
}

/// Create or update the candidate profile.
///
/// # Errors
///
/// Returns an error if the backend rejects the profile.
pub async fn save_profile(token: &str, profile: &CandidateProfile, exists: bool) -> Result<(), ApiError> {
    let (method, path) = profile_save_target(&profile.user_id, exists);
    request_empty(method, &path, Some(token), Some(to_body(profile)?)).await
}

// =============================================================================
// JOBS & APPLICATIONS
// =============================================================================

/// `GET /Jobs`.
///
/// # Errors
///
/// Returns an error if the job list cannot be fetched.
pub async fn list_jobs(token: &str) -> Result<Vec<Job>, ApiError> {
    request(Method::Get, endpoints::JOBS, Some(token), None).await
}

/// `POST /Jobs`.
///
/// # Errors
///
/// Returns an error if the posting is rejected.
pub async fn create_job(token: &str, draft: &JobDraft) -> Result<(), ApiError> {
    request_empty(Method::Post, endpoints::JOBS, Some(token), Some(to_body(draft)?)).await
}

/// `PUT /Jobs/{id}`.
///
/// # Errors
///
/// Returns an error if the update is rejected.
pub async fn update_job(token: &str, job_id: &str, draft: &JobDraft) -> Result<(), ApiError> {
    request_empty(Method::Put, &endpoints::job(job_id), Some(token), Some(to_body(draft)?)).await
}

/// `DELETE /Jobs/{id}`.
///
/// # Errors
///
/// Returns an error if the posting cannot be deleted.
pub async fn delete_job(token: &str, job_id: &str) -> Result<(), ApiError> {
    request_empty(Method::Delete, &endpoints::job(job_id), Some(token), None).await
}

/// `POST /Applications`.
///
/// # Errors
///
/// Returns an error if the application is rejected (e.g. already applied).
pub async fn apply_to_job(token: &str, candidate_id: &str, job_id: &str) -> Result<(), ApiError> {
    let body = to_body(&ApplyRequest { job_id: job_id.to_owned(), candidate_id: candidate_id.to_owned() })?;
    request_empty(Method::Post, endpoints::APPLICATIONS, Some(token), Some(body)).await
}

/// `GET /Applications/candidate/{userId}`.
///
/// # Errors
///
/// Returns an error if the list cannot be fetched.
pub async fn candidate_applications(token: &str, user_id: &str) -> Result<Vec<Application>, ApiError> {
    request(Method::Get, &endpoints::candidate_applications(user_id), Some(token), None).await
}

/// `GET /Applications/job/{jobId}`.
///
/// # Errors
///
/// Returns an error if the list cannot be fetched.
pub async fn job_applications(token: &str, job_id: &str) -> Result<Vec<Application>, ApiError> {
    request(Method::Get, &endpoints::job_applications(job_id), Some(token), None).await
}

/// `PUT /Applications/{id}/status`.
///
/// # Errors
///
/// Returns an error if the backend refuses the status change.
pub async fn update_application_status(
    token: &str,
    application_id: &str,
    status: ApplicationStatus,
) -> Result<(), ApiError> {
    let body = to_body(&StatusUpdate::new(status))?;
    request_empty(Method::Put, &endpoints::application_status(application_id), Some(token), Some(body)).await
}

// =============================================================================
// INTERVIEWS & OFFERS
// =============================================================================

/// `GET /Interviews/candidate/{userId}`.
///
/// # Errors
///
/// Returns an error if the list cannot be fetched.
pub async fn candidate_interviews(token: &str, user_id: &str) -> Result<Vec<Interview>, ApiError> {
    request(Method::Get, &endpoints::candidate_interviews(user_id), Some(token), None).await
}

/// `POST /Interviews`.
///
/// # Errors
///
/// Returns an error if the interview cannot be scheduled.
pub async fn schedule_interview(token: &str, draft: &InterviewDraft) -> Result<(), ApiError> {
    request_empty(Method::Post, endpoints::INTERVIEWS, Some(token), Some(to_body(draft)?)).await
}

/// `GET /Offers/candidate/{userId}`.
///
/// # Errors
///
/// Returns an error if the list cannot be fetched.
pub async fn candidate_offers(token: &str, user_id: &str) -> Result<Vec<Offer>, ApiError> {
    request(Method::Get, &endpoints::candidate_offers(user_id), Some(token), None).await
}

/// `POST /Offers`.
///
/// # Errors
///
/// Returns an error if the offer is rejected.
pub async fn issue_offer(token: &str, draft: &OfferDraft) -> Result<(), ApiError> {
    request_empty(Method::Post, endpoints::OFFERS, Some(token), Some(to_body(draft)?)).await
}

/// `PUT /Offers/{id}/respond`.
///
/// # Errors
///
/// Returns an error if the response is rejected.
pub async fn respond_to_offer(token: &str, offer_id: &str, status: OfferStatus) -> Result<(), ApiError> {
    let body = to_body(&StatusUpdate::new(status))?;
    request_empty(Method::Put, &endpoints::offer_response(offer_id), Some(token), Some(body)).await
}

// =============================================================================
// DOCUMENTS
// =============================================================================

/// `GET /Documents/candidate/{userId}`.
///
/// # Errors
///
/// Returns an error if the list cannot be fetched.
pub async fn candidate_documents(token: &str, user_id: &str) -> Result<Vec<Document>, ApiError> {
    request(Method::Get, &endpoints::candidate_documents(user_id), Some(token), None).await
}

/// `GET /Documents/pending`.
///
/// # Errors
///
/// Returns an error if the list cannot be fetched.
pub async fn pending_documents(token: &str) -> Result<Vec<Document>, ApiError> {
    request(Method::Get, endpoints::DOCUMENTS_PENDING, Some(token), None).await
}

/// `PUT /Documents/{id}/verify`.
///
/// # Errors
///
/// Returns an error if the verification is rejected.
pub async fn verify_document(
    token: &str,
    document_id: &str,
    status: DocumentStatus,
    note: Option<String>,
) -> Result<(), ApiError> {
    let body = to_body(&StatusUpdate { status, note })?;
    request_empty(Method::Put, &endpoints::document_verification(document_id), Some(token), Some(body)).await
}

/// `POST /Documents/upload` as multipart form data.
///
/// # Errors
///
/// Returns an error if the form cannot be built or the upload is rejected.
#[cfg(feature = "hydrate")]
pub async fn upload_document(
    token: &str,
    candidate_id: &str,
    document_type: &str,
    file: &web_sys::File,
) -> Result<(), ApiError> {
    let js_err = |e: wasm_bindgen::JsValue| ApiError::Transport(format!("{e:?}"));
    let form = web_sys::FormData::new().map_err(js_err)?;
    form.append_with_blob_and_filename("file", file, &file.name()).map_err(js_err)?;
    form.append_with_str("candidateId", candidate_id).map_err(js_err)?;
    form.append_with_str("documentType", document_type).map_err(js_err)?;

    let url = api_config().url(endpoints::DOCUMENT_UPLOAD);
    let resp = gloo_net::http::Request::post(&url)
        .header("Authorization", &bearer_header(token))
        .body(form)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    ensure_success(resp).await.map(|_| ())
}

// =============================================================================
// ADMIN & ANALYTICS
// =============================================================================

/// `GET /Analytics/summary`.
///
/// # Errors
///
/// Returns an error if the summary cannot be fetched.
pub async fn analytics_summary(token: &str) -> Result<AnalyticsSummary, ApiError> {
    request(Method::Get, endpoints::ANALYTICS_SUMMARY, Some(token), None).await
}

/// `GET /Employees`.
///
/// # Errors
///
/// Returns an error if the list cannot be fetched.
pub async fn list_employees(token: &str) -> Result<Vec<Employee>, ApiError> {
    request(Method::Get, endpoints::EMPLOYEES, Some(token), None).await
}

/// `POST /Employees`.
///
/// # Errors
///
/// Returns an error if the account cannot be created.
pub async fn create_employee(token: &str, draft: &EmployeeDraft) -> Result<(), ApiError> {
    request_empty(Method::Post, endpoints::EMPLOYEES, Some(token), Some(to_body(draft)?)).await
}

/// `PUT /Employees/{id}/role`.
///
/// # Errors
///
/// Returns an error if the role change is rejected.
pub async fn update_employee_role(token: &str, employee_id: &str, user_type: UserType) -> Result<(), ApiError> {
    let body = to_body(&RoleUpdate { user_type })?;
    request_empty(Method::Put, &endpoints::employee_role(employee_id), Some(token), Some(body)).await
}

/// `DELETE /Employees/{id}`.
///
/// # Errors
///
/// Returns an error if the account cannot be deleted.
pub async fn delete_employee(token: &str, employee_id: &str) -> Result<(), ApiError> {
    request_empty(Method::Delete, &endpoints::employee(employee_id), Some(token), None).await
}
