use super::*;
use crate::storage::MemoryStorage;

fn candidate() -> UserRecord {
    UserRecord {
        user_id: "u1".to_owned(),
        email: "a@b.com".to_owned(),
        first_name: "A".to_owned(),
        last_name: String::new(),
        phone_number: Some("555-0100".to_owned()),
        user_type: UserType::Candidate,
    }
}

/// Simulate a page reload: a fresh store over the same durable storage.
fn reload(store: &SessionStore<MemoryStorage>) -> SessionStore<MemoryStorage> {
    let mut next = SessionStore::new(store.storage().clone());
    next.init();
    next
}

// =============================================================
// Session
// =============================================================

#[test]
fn default_session_is_loading_and_anonymous() {
    let session = Session::default();
    assert!(session.is_loading);
    assert!(!session.is_authenticated());
}

#[test]
fn authenticated_requires_token_and_user() {
    let mut session = Session::authenticated("t1".to_owned(), candidate());
    assert!(session.is_authenticated());
    session.user = None;
    assert!(!session.is_authenticated());
    let session = Session { token: None, user: Some(candidate()), is_loading: false };
    assert!(!session.is_authenticated());
}

// =============================================================
// init
// =============================================================

#[test]
fn new_store_is_loading_until_init() {
    let mut store = SessionStore::new(MemoryStorage::new());
    assert!(store.session().is_loading);
    store.init();
    assert!(!store.session().is_loading);
    assert!(!store.session().is_authenticated());
}

#[test]
fn init_with_unparsable_user_clears_both_keys() {
    let storage = MemoryStorage::new().with_entry(TOKEN_KEY, "t1").with_entry(USER_KEY, "{not json");
    let mut store = SessionStore::new(storage);
    let session = store.init().clone();
    assert!(!session.is_authenticated());
    assert_eq!(session.user, None);
    assert!(!session.is_loading);
    assert!(store.storage().is_empty());
}

#[test]
fn init_with_token_but_no_user_clears_token() {
    let storage = MemoryStorage::new().with_entry(TOKEN_KEY, "t1");
    let mut store = SessionStore::new(storage);
    assert!(!store.init().is_authenticated());
    assert!(!store.storage().contains(TOKEN_KEY));
}

#[test]
fn init_with_blank_token_is_discarded() {
    let user = serde_json::to_string(&candidate()).unwrap();
    let storage = MemoryStorage::new().with_entry(TOKEN_KEY, "  ").with_entry(USER_KEY, &user);
    let mut store = SessionStore::new(storage);
    assert!(!store.init().is_authenticated());
    assert!(store.storage().is_empty());
}

// =============================================================
// login / logout
// =============================================================

#[test]
fn login_then_reload_preserves_user() {
    let mut store = SessionStore::new(MemoryStorage::new());
    store.init();
    store.login("t1".to_owned(), candidate()).unwrap();
    assert!(store.session().is_authenticated());
    assert_eq!(store.bearer(), Some("t1"));

    let reloaded = reload(&store);
    assert!(reloaded.session().is_authenticated());
    assert_eq!(reloaded.session().user.as_ref(), Some(&candidate()));
    assert_eq!(reloaded.session().token.as_deref(), Some("t1"));
}

#[test]
fn logout_then_reload_is_anonymous() {
    let mut store = SessionStore::new(MemoryStorage::new());
    store.login("t1".to_owned(), candidate()).unwrap();
    let session = store.logout().clone();
    assert_eq!(session, Session::anonymous());

    let reloaded = reload(&store);
    assert!(!reloaded.session().is_authenticated());
    assert_eq!(reloaded.session().user, None);
}

#[test]
fn login_quota_failure_propagates_and_keeps_state() {
    let mut store = SessionStore::new(MemoryStorage::with_quota(16));
    store.init();
    let err = store.login("t1".to_owned(), candidate()).unwrap_err();
    assert!(matches!(err, StorageError::Write { ref key, .. } if key == USER_KEY));
    assert_eq!(store.session(), &Session::anonymous());
    assert!(!store.storage().contains(TOKEN_KEY));
}

#[test]
fn login_replaces_previous_session_wholesale() {
    let mut store = SessionStore::new(MemoryStorage::new());
    store.login("t1".to_owned(), candidate()).unwrap();
    let mut admin = candidate();
    admin.user_id = "u2".to_owned();
    admin.user_type = UserType::Admin;
    store.login("t2".to_owned(), admin.clone()).unwrap();
    assert_eq!(store.session().user_id(), Some("u2"));
    assert_eq!(store.session().user_type(), Some(UserType::Admin));
    assert_eq!(reload(&store).session().user, Some(admin));
}
