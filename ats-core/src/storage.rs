//! Durable key/value storage seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client backs this with `localStorage`, the CLI with one file
//! per key. Values are opaque strings; the session store owns the encoding.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

use crate::error::StorageError;

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the serialized [`crate::UserRecord`].
pub const USER_KEY: &str = "user";

/// A synchronous string key/value store that survives process restarts.
pub trait Storage {
    /// Read `key`; `Ok(None)` when it was never written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write is rejected (e.g. quota exceeded).
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`; removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be modified.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-memory storage with an optional byte quota.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that rejects writes once keys plus values exceed `bytes`.
    #[must_use]
    pub fn with_quota(bytes: usize) -> Self {
        Self { entries: HashMap::new(), quota: Some(bytes) }
    }

    /// Seed a raw value, bypassing the quota.
    #[must_use]
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_owned(), value.to_owned());
        self
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn used_bytes_without(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(quota) = self.quota {
            let needed = self.used_bytes_without(key) + key.len() + value.len();
            if needed > quota {
                return Err(StorageError::Write {
                    key: key.to_owned(),
                    reason: format!("quota exceeded ({needed} > {quota} bytes)"),
                });
            }
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}
