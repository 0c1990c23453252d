use super::*;
use ats_core::storage::MemoryStorage;

fn user() -> UserRecord {
    UserRecord {
        user_id: "u1".to_owned(),
        email: "a@b.com".to_owned(),
        first_name: "A".to_owned(),
        last_name: "B".to_owned(),
        phone_number: None,
        user_type: UserType::Candidate,
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_is_loading() {
    let state = AuthState::<MemoryStorage>::default();
    assert!(state.is_loading());
    assert!(!state.is_authenticated());
    assert!(state.user().is_none());
}

#[test]
fn init_settles_loading() {
    let mut state = AuthState::new(MemoryStorage::new());
    state.init();
    assert!(!state.is_loading());
    assert_eq!(state.credentials(), None);
}

// =============================================================
// login / logout
// =============================================================

#[test]
fn login_exposes_credentials() {
    let mut state = AuthState::new(MemoryStorage::new());
    state.init();
    state.login("t1".to_owned(), user()).unwrap();
    assert!(state.is_authenticated());
    assert_eq!(state.user_type(), Some(UserType::Candidate));
    assert_eq!(state.credentials(), Some(("t1".to_owned(), "u1".to_owned())));
}

#[test]
fn login_storage_failure_leaves_state_signed_out() {
    let mut state = AuthState::new(MemoryStorage::with_quota(4));
    state.init();
    assert!(state.login("t1".to_owned(), user()).is_err());
    assert!(!state.is_authenticated());
}

#[test]
fn logout_clears_token() {
    let mut state = AuthState::new(MemoryStorage::new());
    state.login("t1".to_owned(), user()).unwrap();
    state.logout();
    assert_eq!(state.token(), None);
    assert!(!state.is_loading());
}
