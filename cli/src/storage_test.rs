use ats_core::SessionStore;
use ats_core::storage::{TOKEN_KEY, USER_KEY};
use ats_core::types::{UserRecord, UserType};

use super::*;

fn user() -> UserRecord {
    UserRecord {
        user_id: "u1".to_owned(),
        email: "ada@example.com".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        phone_number: None,
        user_type: UserType::Candidate,
    }
}

#[test]
fn missing_key_reads_as_none() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path().join("state"));
    assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);
}

#[test]
fn set_creates_directory_and_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let mut storage = FileStorage::new(dir.path().join("nested").join("state"));
    storage.set(TOKEN_KEY, "t1").unwrap();
    assert_eq!(storage.get(TOKEN_KEY).unwrap().as_deref(), Some("t1"));
    assert!(storage.dir().join(TOKEN_KEY).is_file());
}

#[test]
fn remove_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let mut storage = FileStorage::new(dir.path());
    storage.set(USER_KEY, "{}").unwrap();
    storage.remove(USER_KEY).unwrap();
    storage.remove(USER_KEY).unwrap();
    assert_eq!(storage.get(USER_KEY).unwrap(), None);
}

#[test]
fn path_like_keys_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut storage = FileStorage::new(dir.path());
    assert!(storage.set("../escape", "x").is_err());
    assert!(storage.get("").is_err());
}

#[test]
fn session_survives_a_new_process() {
    let dir = tempfile::tempdir().unwrap();
    let mut first = SessionStore::new(FileStorage::new(dir.path()));
    first.init();
    first.login("t1".to_owned(), user()).unwrap();

    let mut second = SessionStore::new(FileStorage::new(dir.path()));
    let session = second.init();
    assert!(session.is_authenticated());
    assert_eq!(session.user.as_ref(), Some(&user()));
    assert_eq!(second.bearer(), Some("t1"));
}

#[test]
fn logout_clears_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = SessionStore::new(FileStorage::new(dir.path()));
    store.init();
    store.login("t1".to_owned(), user()).unwrap();
    store.logout();
    assert!(!dir.path().join(TOKEN_KEY).exists());
    assert!(!dir.path().join(USER_KEY).exists());

    let mut reloaded = SessionStore::new(FileStorage::new(dir.path()));
    assert!(!reloaded.init().is_authenticated());
}

#[test]
fn corrupt_user_file_is_cleared_on_init() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(TOKEN_KEY), "t1").unwrap();
    std::fs::write(dir.path().join(USER_KEY), "not json").unwrap();
    let mut store = SessionStore::new(FileStorage::new(dir.path()));
    assert!(!store.init().is_authenticated());
    assert!(!dir.path().join(TOKEN_KEY).exists());
    assert!(!dir.path().join(USER_KEY).exists());
}

#[cfg(unix)]
#[test]
fn stored_token_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let mut storage = FileStorage::new(dir.path());
    storage.set(TOKEN_KEY, "t1").unwrap();
    let mode = fs::metadata(dir.path().join(TOKEN_KEY)).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[cfg(unix)]
#[test]
fn overwrite_tightens_existing_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(TOKEN_KEY);
    fs::write(&path, "old").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();
    let mut storage = FileStorage::new(dir.path());
    storage.set(TOKEN_KEY, "t2").unwrap();
    assert_eq!(fs::metadata(&path).unwrap().permissions().mode() & 0o777, 0o600);
    assert_eq!(storage.get(TOKEN_KEY).unwrap().as_deref(), Some("t2"));
}
