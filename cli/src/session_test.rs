use ats_core::storage::MemoryStorage;

use super::*;

fn user(user_type: UserType) -> UserRecord {
    UserRecord {
        user_id: "u1".to_owned(),
        email: "ada@example.com".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        phone_number: None,
        user_type,
    }
}

fn signed_in(user_type: UserType) -> SessionStore<MemoryStorage> {
    let mut store = SessionStore::new(MemoryStorage::new());
    store.init();
    store.login("t1".to_owned(), user(user_type)).unwrap();
    store
}

fn signed_out() -> SessionStore<MemoryStorage> {
    let mut store = SessionStore::new(MemoryStorage::new());
    store.init();
    store
}

#[test]
fn signed_in_commands_get_credentials() {
    let creds = require_signed_in(&signed_in(UserType::Candidate)).unwrap();
    assert_eq!(creds.token, "t1");
    assert_eq!(creds.user.user_id, "u1");
}

#[test]
fn anonymous_users_are_sent_to_login() {
    assert!(matches!(require_signed_in(&signed_out()), Err(CliError::NotSignedIn)));
    assert!(matches!(require_role(&signed_out(), UserType::Admin), Err(CliError::NotSignedIn)));
}

#[test]
fn uninitialized_store_is_not_signed_in() {
    let store = SessionStore::new(MemoryStorage::new());
    assert!(matches!(require_signed_in(&store), Err(CliError::NotSignedIn)));
    assert!(require_signed_out(&store).is_ok());
}

#[test]
fn login_is_refused_while_signed_in() {
    let err = require_signed_out(&signed_in(UserType::Candidate)).unwrap_err();
    assert!(matches!(err, CliError::AlreadySignedIn { ref email } if email == "ada@example.com"));
    assert!(require_signed_out(&signed_out()).is_ok());
}

#[test]
fn wrong_role_is_denied() {
    let err = require_role(&signed_in(UserType::Candidate), UserType::Admin).unwrap_err();
    assert!(matches!(err, CliError::AccessDenied { required: UserType::Admin }));
    assert!(err.to_string().contains("Admin"));
}

#[test]
fn matching_role_is_allowed() {
    let creds = require_role(&signed_in(UserType::Employee), UserType::Employee).unwrap();
    assert_eq!(creds.user.user_type, UserType::Employee);
}
