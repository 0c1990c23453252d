//! Error taxonomy for backend calls and durable storage.
//!
//! ERROR HANDLING
//! ==============
//! Every call site in the UI converts an [`ApiError`] into a toast via
//! [`ApiError::user_message`]; nothing is retried. Storage failures surface
//! only from `login`, everything else in the session lifecycle self-heals.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// Failure while reading or writing the durable key/value store.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage backend is reachable (e.g. private browsing, no window).
    #[error("storage unavailable")]
    Unavailable,
    /// Reading `key` failed.
    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },
    /// Writing `key` failed, most commonly because the quota was exceeded.
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
    /// Removing `key` failed.
    #[error("failed to remove `{key}`: {reason}")]
    Remove { key: String, reason: String },
}

/// Failure of a single REST call against the backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Transport(String),
    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Persisting session data failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// The call was made outside the browser (server render).
    #[error("not available on server")]
    Unavailable,
}

#[derive(Deserialize)]
struct MessageBody {
    #[serde(alias = "Message", alias = "error", alias = "title")]
    message: String,
}

impl ApiError {
    /// Build a status error from a non-2xx response body.
    ///
    /// The backend reports failures as `{ "message": "..." }`; anything else
    /// falls back to a generic message carrying the status code.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<MessageBody>(body)
            .map(|parsed| parsed.message)
            .unwrap_or_default();
        let message = message.trim();
        let message = if message.is_empty() {
            request_failed_message(status)
        } else {
            message.to_owned()
        };
        Self::Status { status, message }
    }

    /// HTTP status code, when the backend answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Text suitable for a toast notification.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(_) => "Could not reach the server. Check your connection.".to_owned(),
            Self::Status { status: 401, .. } => "Your session has expired. Please sign in again.".to_owned(),
            Self::Status { message, .. } => message.clone(),
            Self::Decode(_) => "The server sent an unexpected response.".to_owned(),
            Self::Storage(err) => format!("Could not save your session: {err}"),
            Self::Unavailable => "This action is only available in the browser.".to_owned(),
        }
    }
}

/// Fallback message for a non-2xx response without a usable body.
#[must_use]
pub fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}
