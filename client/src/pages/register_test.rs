use super::*;

fn filled() -> RegistrationForm {
    RegistrationForm {
        first_name: " Ada ".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        phone_number: String::new(),
        password: "correct horse".to_owned(),
        confirm_password: "correct horse".to_owned(),
    }
}

#[test]
fn valid_form_builds_candidate_request() {
    let request = validate_registration(&filled()).unwrap();
    assert_eq!(request.first_name, "Ada");
    assert_eq!(request.user_type, UserType::Candidate);
    assert_eq!(request.phone_number, None);
}

#[test]
fn phone_number_is_kept_when_given() {
    let form = RegistrationForm { phone_number: " 555-0100 ".to_owned(), ..filled() };
    assert_eq!(validate_registration(&form).unwrap().phone_number.as_deref(), Some("555-0100"));
}

#[test]
fn mismatched_passwords_are_rejected() {
    let form = RegistrationForm { confirm_password: "different pass".to_owned(), ..filled() };
    assert_eq!(validate_registration(&form).unwrap_err(), "Passwords do not match.");
}

#[test]
fn short_password_is_rejected() {
    let form = RegistrationForm { password: "short".to_owned(), confirm_password: "short".to_owned(), ..filled() };
    assert!(validate_registration(&form).unwrap_err().contains("at least 8"));
}

#[test]
fn missing_names_and_bad_email_are_rejected() {
    assert!(validate_registration(&RegistrationForm { last_name: "  ".to_owned(), ..filled() }).is_err());
    assert!(validate_registration(&RegistrationForm { email: "nope".to_owned(), ..filled() }).is_err());
}
