use super::*;

#[test]
fn missing_key_reads_as_none() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get(TOKEN_KEY), Ok(None));
}

#[test]
fn set_then_get_returns_value() {
    let mut storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "t1").unwrap();
    assert_eq!(storage.get(TOKEN_KEY), Ok(Some("t1".to_owned())));
}

#[test]
fn remove_missing_key_succeeds() {
    let mut storage = MemoryStorage::new();
    assert_eq!(storage.remove(USER_KEY), Ok(()));
}

#[test]
fn quota_rejects_oversized_write() {
    let mut storage = MemoryStorage::with_quota(10);
    storage.set("token", "t1").unwrap();
    let err = storage.set("user", "0123456789").unwrap_err();
    assert!(matches!(err, StorageError::Write { ref key, .. } if key == "user"));
    assert!(!storage.contains("user"));
}

#[test]
fn quota_counts_replacement_not_previous_value() {
    let mut storage = MemoryStorage::with_quota(8);
    storage.set("token", "abc").unwrap();
    storage.set("token", "xyz").unwrap();
    assert_eq!(storage.get("token"), Ok(Some("xyz".to_owned())));
}
