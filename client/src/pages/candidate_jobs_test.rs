use ats_core::types::ApplicationStatus;

use super::*;

fn job(id: &str, title: &str, posted: &str, open: bool) -> Job {
    serde_json::from_value(serde_json::json!({
        "jobId": id,
        "title": title,
        "department": "Engineering",
        "location": "Remote",
        "postedAt": posted,
        "isOpen": open,
    }))
    .unwrap()
}

#[test]
fn closed_jobs_are_hidden() {
    let jobs = [job("1", "Rust Engineer", "2025-01-01", true), job("2", "Designer", "2025-02-01", false)];
    let visible = visible_jobs(&jobs, "");
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].job_id, "1");
}

#[test]
fn newest_posting_comes_first() {
    let jobs = [job("old", "A", "2024-12-01", true), job("new", "B", "2025-03-01", true)];
    let ids: Vec<_> = visible_jobs(&jobs, "").into_iter().map(|j| j.job_id).collect();
    assert_eq!(ids, ["new", "old"]);
}

#[test]
fn search_filters_by_title() {
    let jobs = [job("1", "Rust Engineer", "2025-01-01", true), job("2", "Recruiter", "2025-01-02", true)];
    let visible = visible_jobs(&jobs, "rust");
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Rust Engineer");
}

#[test]
fn applied_ids_collect_job_ids() {
    let app: Application = serde_json::from_value(serde_json::json!({
        "applicationId": "a1",
        "jobId": "7",
        "candidateId": "u1",
        "status": "Applied",
    }))
    .unwrap();
    assert_eq!(app.status, ApplicationStatus::Applied);
    assert!(applied_job_ids(&[app]).contains("7"));
}
