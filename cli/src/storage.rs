//! One-file-per-key [`Storage`] under the CLI state directory.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plays the role `localStorage` plays in the browser: the session store
//! writes `token` and `user` here, and the next invocation reads them back.
//! The directory is created lazily on the first write. Files hold the bearer
//! token, so on Unix they are readable by the owner only.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::fs;
use std::io::{ErrorKind, Write};
#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
use std::path::{Path, PathBuf};

use ats_core::StorageError;
use ats_core::storage::Storage;

#[derive(Clone, Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::Write { key: key.to_owned(), reason: "invalid key".to_owned() });
        }
        Ok(self.dir.join(key))
    }
}

#[cfg(unix)]
const FILE_MODE: u32 = 0o600;

fn write_private(path: &Path, value: &str) -> std::io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(FILE_MODE);
    let mut file = options.open(path)?;
    // `mode` only applies on creation; tighten files left by older runs.
    #[cfg(unix)]
    file.set_permissions(fs::Permissions::from_mode(FILE_MODE))?;
    file.write_all(value.as_bytes())
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read { key: key.to_owned(), reason: e.to_string() }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path(key)?;
        let write_err = |e: std::io::Error| StorageError::Write { key: key.to_owned(), reason: e.to_string() };
        fs::create_dir_all(&self.dir).map_err(write_err)?;
        write_private(&path, value).map_err(write_err)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Remove { key: key.to_owned(), reason: e.to_string() }),
        }
    }
}
