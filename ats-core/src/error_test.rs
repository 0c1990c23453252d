use super::*;

#[test]
fn from_response_uses_message_body() {
    let err = ApiError::from_response(400, r#"{"message":"Email already registered"}"#);
    assert_eq!(
        err,
        ApiError::Status { status: 400, message: "Email already registered".to_owned() }
    );
    assert_eq!(err.user_message(), "Email already registered");
}

#[test]
fn from_response_accepts_pascal_case_message() {
    let err = ApiError::from_response(409, r#"{"Message":"Already applied"}"#);
    assert_eq!(err.to_string(), "Already applied");
}

#[test]
fn from_response_falls_back_on_plain_text_body() {
    let err = ApiError::from_response(500, "Internal Server Error");
    assert_eq!(err.to_string(), "request failed: 500");
}

#[test]
fn from_response_falls_back_on_blank_message() {
    let err = ApiError::from_response(422, r#"{"message":"   "}"#);
    assert_eq!(err.to_string(), "request failed: 422");
}

#[test]
fn not_found_only_for_404_status() {
    assert!(ApiError::from_response(404, "").is_not_found());
    assert!(!ApiError::from_response(500, "").is_not_found());
    assert!(!ApiError::Transport("offline".to_owned()).is_not_found());
}

#[test]
fn unauthorized_has_session_expired_message() {
    let err = ApiError::from_response(401, r#"{"message":"token expired"}"#);
    assert!(err.is_unauthorized());
    assert_eq!(err.user_message(), "Your session has expired. Please sign in again.");
}

#[test]
fn transport_error_message_is_generic() {
    let err = ApiError::Transport("dns failure".to_owned());
    assert_eq!(err.status(), None);
    assert!(err.user_message().contains("Could not reach the server"));
}

#[test]
fn storage_error_converts_into_api_error() {
    let err: ApiError = StorageError::Write { key: "user".to_owned(), reason: "quota".to_owned() }.into();
    assert_eq!(err.to_string(), "failed to write `user`: quota");
}
