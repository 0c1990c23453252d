//! Route-level page components.
//!
//! Candidate dashboard tabs live in `candidate_*`, HR workspace tabs in
//! `hr_*`. Each tab owns its own data signals and fetches on mount.

pub mod access_denied;
pub mod admin;
pub mod candidate_applications;
pub mod candidate_documents;
pub mod candidate_interviews;
pub mod candidate_jobs;
pub mod candidate_offers;
pub mod candidate_profile;
pub mod dashboard;
pub mod home;
pub mod hr;
pub mod hr_analytics;
pub mod hr_applicants;
pub mod hr_documents;
pub mod hr_postings;
pub mod login;
pub mod register;
