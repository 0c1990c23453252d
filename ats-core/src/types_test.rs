use super::*;

// =============================================================
// UserType
// =============================================================

#[test]
fn user_type_parses_case_insensitively() {
    assert_eq!("candidate".parse::<UserType>(), Ok(UserType::Candidate));
    assert_eq!("Candidate".parse::<UserType>(), Ok(UserType::Candidate));
    assert_eq!("HR".parse::<UserType>(), Ok(UserType::Employee));
    assert_eq!(" Admin ".parse::<UserType>(), Ok(UserType::Admin));
}

#[test]
fn user_type_rejects_unknown_role() {
    assert_eq!("guest".parse::<UserType>(), Err(UnknownUserType("guest".to_owned())));
    assert!(serde_json::from_str::<UserType>("\"guest\"").is_err());
}

#[test]
fn user_type_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&UserType::Employee).unwrap(), "\"employee\"");
}

// =============================================================
// UserRecord
// =============================================================

#[test]
fn user_record_accepts_minimal_payload() {
    let user: UserRecord =
        serde_json::from_str(r#"{"userId":"u1","firstName":"A","userType":"candidate"}"#).unwrap();
    assert_eq!(user.user_id, "u1");
    assert_eq!(user.email, "");
    assert_eq!(user.last_name, "");
    assert_eq!(user.phone_number, None);
    assert_eq!(user.user_type, UserType::Candidate);
}

#[test]
fn user_record_accepts_numeric_id() {
    let user: UserRecord =
        serde_json::from_str(r#"{"userId":42,"firstName":"B","userType":"Admin"}"#).unwrap();
    assert_eq!(user.user_id, "42");
    assert_eq!(user.user_type, UserType::Admin);
}

#[test]
fn user_record_serializes_camel_case_without_missing_phone() {
    let user = UserRecord {
        user_id: "u1".to_owned(),
        email: "a@b.com".to_owned(),
        first_name: "A".to_owned(),
        last_name: "Z".to_owned(),
        phone_number: None,
        user_type: UserType::Candidate,
    };
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "userId": "u1",
            "email": "a@b.com",
            "firstName": "A",
            "lastName": "Z",
            "userType": "candidate"
        })
    );
}

#[test]
fn display_name_falls_back_to_email() {
    let mut user: UserRecord =
        serde_json::from_str(r#"{"userId":"u1","email":"x@y.z","firstName":" ","userType":"candidate"}"#)
            .unwrap();
    assert_eq!(user.display_name(), "x@y.z");
    user.first_name = "Ada".to_owned();
    user.last_name = "Lovelace".to_owned();
    assert_eq!(user.display_name(), "Ada Lovelace");
}

// =============================================================
// Jobs
// =============================================================

fn job(title: &str, department: &str, location: &str) -> Job {
    serde_json::from_value(serde_json::json!({
        "id": 7,
        "title": title,
        "department": department,
        "location": location,
    }))
    .unwrap()
}

#[test]
fn job_defaults_to_open_and_accepts_id_alias() {
    let job = job("Rust Engineer", "Platform", "Remote");
    assert_eq!(job.job_id, "7");
    assert!(job.is_open);
    assert_eq!(job.salary_range(), None);
}

#[test]
fn job_matches_any_visible_field() {
    let job = job("Rust Engineer", "Platform", "Berlin");
    assert!(job.matches(""));
    assert!(job.matches("rust"));
    assert!(job.matches("PLATFORM"));
    assert!(job.matches(" berlin "));
    assert!(!job.matches("marketing"));
}

#[test]
fn salary_range_formats_known_bounds() {
    let mut job = job("Designer", "", "");
    job.salary_min = Some(50_000.0);
    assert_eq!(job.salary_range().as_deref(), Some("from 50000"));
    job.salary_max = Some(70_000.0);
    assert_eq!(job.salary_range().as_deref(), Some("50000 – 70000"));
    job.salary_min = None;
    assert_eq!(job.salary_range().as_deref(), Some("up to 70000"));
}

// =============================================================
// Statuses
// =============================================================

#[test]
fn application_status_round_trips_pascal_case() {
    let app: Application = serde_json::from_str(
        r#"{"applicationId":1,"jobId":2,"candidateId":"u1","status":"Interviewing"}"#,
    )
    .unwrap();
    assert_eq!(app.status, ApplicationStatus::Interviewing);
    assert_eq!(
        serde_json::to_value(StatusUpdate::new(ApplicationStatus::Hired)).unwrap(),
        serde_json::json!({ "status": "Hired" })
    );
}

#[test]
fn application_status_parses_label() {
    assert_eq!("screening".parse::<ApplicationStatus>(), Ok(ApplicationStatus::Screening));
    assert!("lost".parse::<ApplicationStatus>().is_err());
}

#[test]
fn only_open_applications_are_active() {
    assert!(ApplicationStatus::Applied.is_active());
    assert!(ApplicationStatus::Offered.is_active());
    assert!(!ApplicationStatus::Hired.is_active());
    assert!(!ApplicationStatus::Withdrawn.is_active());
}

#[test]
fn only_pending_offer_awaits_response() {
    let mut offer: Offer =
        serde_json::from_str(r#"{"offerId":"o1","applicationId":"a1","status":"Pending"}"#).unwrap();
    assert!(offer.awaiting_response());
    offer.status = OfferStatus::Declined;
    assert!(!offer.awaiting_response());
}

// =============================================================
// Profile & analytics
// =============================================================

#[test]
fn candidate_profile_tolerates_missing_fields() {
    let profile: CandidateProfile =
        serde_json::from_str(r#"{"userId":"u1","skills":["rust"],"linkedInUrl":"https://l.in/a"}"#).unwrap();
    assert_eq!(profile.user_id, "u1");
    assert_eq!(profile.skills, vec!["rust".to_owned()]);
    assert_eq!(profile.linkedin_url.as_deref(), Some("https://l.in/a"));
    assert!(profile.address.is_empty());
}

#[test]
fn offer_acceptance_rate_needs_answers() {
    let mut summary = AnalyticsSummary::default();
    assert_eq!(summary.offer_acceptance_rate(), None);
    summary.offers_accepted = 3;
    summary.offers_declined = 1;
    assert_eq!(summary.offer_acceptance_rate(), Some(75.0));
}
