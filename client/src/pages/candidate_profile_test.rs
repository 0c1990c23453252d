use ats_core::types::UserType;

use super::*;

fn user() -> UserRecord {
    UserRecord {
        user_id: "u1".to_owned(),
        email: "ada@example.com".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        phone_number: Some("555-0100".to_owned()),
        user_type: UserType::Candidate,
    }
}

#[test]
fn missing_profile_seeds_from_user_without_error() {
    let (loaded, err) = profile_from_lookup(Err(ApiError::from_response(404, "")), &user());
    assert!(err.is_none());
    assert!(!loaded.exists);
    assert_eq!(loaded.profile.first_name, "Ada");
    assert_eq!(loaded.profile.user_id, "u1");
}

#[test]
fn other_lookup_failures_are_reported() {
    let (loaded, err) = profile_from_lookup(Err(ApiError::Transport("offline".to_owned())), &user());
    assert!(!loaded.exists);
    assert_eq!(err, Some(ApiError::Transport("offline".to_owned())));
}

#[test]
fn existing_profile_is_kept_as_is() {
    let stored = CandidateProfile { city: "London".to_owned(), ..CandidateProfile::seeded_from(&user()) };
    let (loaded, err) = profile_from_lookup(Ok(stored.clone()), &user());
    assert!(err.is_none());
    assert!(loaded.exists);
    assert_eq!(loaded.profile, stored);
}

#[test]
fn parse_experience_accepts_blank_and_whole_numbers() {
    assert_eq!(parse_experience(""), Ok(None));
    assert_eq!(parse_experience(" 7 "), Ok(Some(7)));
    assert!(parse_experience("3.5").is_err());
    assert!(parse_experience("-1").is_err());
}
