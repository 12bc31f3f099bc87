//! Record Store subsystem for bookdb
//!
//! The store holds the canonical persistent state of the book collection as a
//! single JSON document. There is no row-level access: every read loads the
//! whole collection and every write rewrites it whole, so each operation is
//! O(n) in collection size.
//!
//! The `BookStore` trait is the injection seam. The server runs on
//! `JsonFileStore`; tests substitute `MemoryStore`.

mod errors;
mod json_file;
mod memory;

use crate::books::Book;

pub use errors::{StoreError, StoreResult};
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Persistence abstraction over the shared book document.
pub trait BookStore: Send + Sync {
    /// Read and parse the entire persisted collection.
    fn load_all(&self) -> StoreResult<Vec<Book>>;

    /// Serialize the full collection and overwrite the persisted document.
    fn save_all(&self, books: &[Book]) -> StoreResult<()>;
}
