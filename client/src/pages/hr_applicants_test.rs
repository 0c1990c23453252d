use super::*;

fn application() -> Application {
    serde_json::from_value(serde_json::json!({
        "applicationId": "a1",
        "jobId": "j1",
        "candidateId": "u1",
        "status": "Screening",
    }))
    .unwrap()
}

#[test]
fn interview_requires_a_time() {
    assert!(build_interview(&application(), "  ", "Room 1", "").is_err());
}

#[test]
fn interview_links_application_and_candidate() {
    let draft = build_interview(&application(), "2025-04-01T10:30", " Room 1 ", "").unwrap();
    assert_eq!(draft.application_id, "a1");
    assert_eq!(draft.candidate_id, "u1");
    assert_eq!(draft.location.as_deref(), Some("Room 1"));
    assert_eq!(draft.interviewer, None);
}

#[test]
fn offer_requires_salary() {
    assert_eq!(build_offer(&application(), "", "", "").unwrap_err(), "Enter the offered salary.");
    assert!(build_offer(&application(), "a lot", "", "").is_err());
}

#[test]
fn offer_keeps_optional_fields() {
    let draft = build_offer(&application(), "95,000", "2025-05-01", "").unwrap();
    assert_eq!(draft.salary, Some(95_000.0));
    assert_eq!(draft.start_date.as_deref(), Some("2025-05-01"));
    assert_eq!(draft.notes, None);
}
