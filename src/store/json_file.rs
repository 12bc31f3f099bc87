//! JSON-file-backed record store
//!
//! The entire collection lives in one pretty-printed JSON array on disk.
//! Loads re-read the file on every call; saves rewrite it whole in a single
//! synchronous write. No partial-write recovery.

use std::fs;
use std::path::{Path, PathBuf};

use crate::books::Book;

use super::errors::{StoreError, StoreResult};
use super::BookStore;

/// Record store persisting the collection to a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store over the given document path.
    ///
    /// The file is not touched until the first load, save, or
    /// `ensure_exists` call.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the persisted document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the persisted document exists on disk
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Create the document as an empty collection if it is absent.
    ///
    /// An existing document is left untouched, whatever it contains.
    pub fn ensure_exists(&self) -> StoreResult<()> {
        if self.exists() {
            return Ok(());
        }
        self.save_all(&[])
    }
}

impl BookStore for JsonFileStore {
    fn load_all(&self) -> StoreResult<Vec<Book>> {
        let data = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_str(&data).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn save_all(&self, books: &[Book]) -> StoreResult<()> {
        // Pretty-printed to match the document format of prior versions,
        // keeping it hand-editable.
        let data = serde_json::to_string_pretty(books).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;

        fs::write(&self.path, data).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
