//! Error types shared by the storage layer and the stores built on top of it.

use thiserror::Error;

/// Failure while reading or writing persisted state.
///
/// Unknown ids and corrupt payloads are not errors in this crate; they degrade
/// to no-ops and defaults. Only a backend that refuses a read or write ends up
/// here.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("LMDB error: {0}")]
    Lmdb(#[from] lmdb::Error),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored value under '{0}' is not valid UTF-8")]
    InvalidUtf8(String),

    #[error("database has been closed")]
    Closed,

    #[error("storage lock poisoned")]
    LockPoisoned,
}

/// Reasons a hymn form is rejected before it becomes a draft.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("title is required")]
    MissingTitle,

    #[error("lyrics are required")]
    MissingLyrics,

    #[error("hymn number '{0}' is not an integer")]
    InvalidNumber(String),
}
