//! Error types shared by the core components.
//!
//! The portal distinguishes three kinds of failure:
//! - [`ValidationError`]: a required field is empty. Raised before anything is
//!   persisted or sent, so the caller's state is untouched.
//! - [`NetworkError`]: the feedback store could not be reached or answered
//!   with a non-success status. Never retried automatically.
//! - [`ClearError::PartialBulkFailure`]: at least one delete of a bulk clear
//!   failed. Deletes that already succeeded are not rolled back.

use thiserror::Error;

/// A required field was empty (or otherwise unacceptable) before a mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: &'static str,
}

impl ValidationError {
    pub fn empty(field: &'static str) -> Self {
        Self {
            field,
            reason: "must not be empty",
        }
    }

    pub fn out_of_range(field: &'static str) -> Self {
        Self {
            field,
            reason: "is out of range",
        }
    }
}

/// Failure of the key-value storage backing the catalog and the session flag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage is not available: {0}")]
    Unavailable(String),
    #[error("failed to write key '{key}': {message}")]
    Write { key: String, message: String },
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("stored form catalog is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Failure talking to the feedback record store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("request was aborted")]
    Aborted,
}

#[derive(Debug, Error)]
pub enum ClearError {
    /// The initial listing of records failed; nothing was deleted.
    #[error("could not list feedback before clearing: {0}")]
    Fetch(NetworkError),
    /// Some deletes failed. The others completed and are not rolled back.
    #[error("{failed} of {total} deletes failed (first error: {first})")]
    PartialBulkFailure {
        failed: usize,
        total: usize,
        first: NetworkError,
    },
    #[error("could not re-list feedback after clearing: {0}")]
    Refresh(NetworkError),
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Network(#[from] NetworkError),
}
