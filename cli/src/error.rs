use std::path::PathBuf;

use ats_core::types::UserType;
use ats_core::{ApiError, StorageError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("not signed in; run `ats login` first")]
    NotSignedIn,
    #[error("already signed in as {email}; run `ats logout` first")]
    AlreadySignedIn { email: String },
    #[error("access denied: this command requires the {} role", required.label())]
    AccessDenied { required: UserType },
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("session storage: {0}")]
    Storage(#[from] StorageError),
    #[error("cannot read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
