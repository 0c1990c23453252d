use super::*;

fn filled() -> JobForm {
    JobForm {
        title: " Rust Engineer ".to_owned(),
        department: "Engineering".to_owned(),
        location: "Remote".to_owned(),
        salary_min: "80,000".to_owned(),
        salary_max: "120000".to_owned(),
        ..JobForm::default()
    }
}

#[test]
fn valid_form_builds_draft() {
    let draft = validate_job_form(&filled()).unwrap();
    assert_eq!(draft.title, "Rust Engineer");
    assert_eq!(draft.salary_min, Some(80_000.0));
    assert_eq!(draft.salary_max, Some(120_000.0));
    assert!(draft.is_open);
}

#[test]
fn blank_title_is_rejected() {
    let form = JobForm { title: "   ".to_owned(), ..filled() };
    assert_eq!(validate_job_form(&form).unwrap_err(), "Title is required.");
}

#[test]
fn inverted_salary_band_is_rejected() {
    let form = JobForm { salary_min: "150000".to_owned(), ..filled() };
    assert!(validate_job_form(&form).unwrap_err().contains("cannot exceed"));
}

#[test]
fn salary_bounds_are_optional() {
    let form = JobForm { salary_min: String::new(), salary_max: String::new(), ..filled() };
    let draft = validate_job_form(&form).unwrap();
    assert_eq!((draft.salary_min, draft.salary_max), (None, None));
}

#[test]
fn edit_form_round_trips_existing_posting() {
    let job: Job = serde_json::from_value(serde_json::json!({
        "jobId": 3,
        "title": "Recruiter",
        "salaryMin": 50000.0,
        "isOpen": false,
    }))
    .unwrap();
    let form = JobForm::from(&job);
    assert_eq!(form.salary_min, "50000");
    assert!(!form.is_open);
    assert_eq!(validate_job_form(&form).unwrap(), JobDraft::from(&job));
}
