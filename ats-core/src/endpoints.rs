//! REST endpoint paths, relative to [`crate::config::ApiConfig`].

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

pub const LOGIN: &str = "/auth/login";
pub const REGISTER: &str = "/auth/register";
pub const LOGOUT: &str = "/auth/logout";
pub const CANDIDATES: &str = "/Candidate";
pub const JOBS: &str = "/Jobs";
pub const APPLICATIONS: &str = "/Applications";
pub const INTERVIEWS: &str = "/Interviews";
pub const OFFERS: &str = "/Offers";
pub const DOCUMENT_UPLOAD: &str = "/Documents/upload";
pub const DOCUMENTS_PENDING: &str = "/Documents/pending";
pub const ANALYTICS_SUMMARY: &str = "/Analytics/summary";
pub const EMPLOYEES: &str = "/Employees";

#[must_use]
pub fn candidate_completion(user_id: &str) -> String {
    format!("/Candidate/{user_id}/isComplete")
}

#[must_use]
pub fn candidate_profile(user_id: &str) -> String {
    format!("/Candidate/{user_id}")
}

#[must_use]
pub fn job(job_id: &str) -> String {
    format!("/Jobs/{job_id}")
}

#[must_use]
pub fn candidate_applications(user_id: &str) -> String {
    format!("/Applications/candidate/{user_id}")
}

#[must_use]
pub fn job_applications(job_id: &str) -> String {
    format!("/Applications/job/{job_id}")
}

#[must_use]
pub fn application_status(application_id: &str) -> String {
    format!("/Applications/{application_id}/status")
}

#[must_use]
pub fn candidate_interviews(user_id: &str) -> String {
    format!("/Interviews/candidate/{user_id}")
}

#[must_use]
pub fn candidate_offers(user_id: &str) -> String {
    format!("/Offers/candidate/{user_id}")
}

#[must_use]
pub fn offer_response(offer_id: &str) -> String {
    format!("/Offers/{offer_id}/respond")
}

#[must_use]
pub fn candidate_documents(user_id: &str) -> String {
    format!("/Documents/candidate/{user_id}")
}

#[must_use]
pub fn document_verification(document_id: &str) -> String {
    format!("/Documents/{document_id}/verify")
}

#[must_use]
pub fn employee(employee_id: &str) -> String {
    format!("/Employees/{employee_id}")
}

#[must_use]
pub fn employee_role(employee_id: &str) -> String {
    format!("/Employees/{employee_id}/role")
}
