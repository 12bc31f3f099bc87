//! Store error types
//!
//! Read/write failures carry the document path; parse failures additionally
//! carry the serde error. All of these surface to the API layer as a generic
//! internal error, with the detail logged server-side only.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by the record store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The persisted document could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The persisted document could not be written
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The persisted document is not a valid JSON array of records
    #[error("invalid book document {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Path of the document involved, if any
    pub fn path(&self) -> &PathBuf {
        match self {
            StoreError::Read { path, .. } => path,
            StoreError::Write { path, .. } => path,
            StoreError::Parse { path, .. } => path,
        }
    }
}
