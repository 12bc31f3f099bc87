//! In-memory record store
//!
//! Drop-in substitute for `JsonFileStore` in tests: same whole-collection
//! load/save contract, no disk involved.

use std::sync::Mutex;

use crate::books::Book;

use super::errors::StoreResult;
use super::BookStore;

/// Record store holding the collection in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    books: Mutex<Vec<Book>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the given collection
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: Mutex::new(books),
        }
    }
}

impl BookStore for MemoryStore {
    fn load_all(&self) -> StoreResult<Vec<Book>> {
        let books = self.books.lock().unwrap_or_else(|e| e.into_inner());
        Ok(books.clone())
    }

    fn save_all(&self, books: &[Book]) -> StoreResult<()> {
        let mut guard = self.books.lock().unwrap_or_else(|e| e.into_inner());
        *guard = books.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_load_returns_saved_collection() {
        let store = MemoryStore::new();
        let book = Book::create(json!({"title": "Dune"}).as_object().cloned().unwrap());

        store.save_all(std::slice::from_ref(&book)).unwrap();

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, book.id);
    }

    #[test]
    fn test_empty_store_loads_empty() {
        let store = MemoryStore::new();
        assert!(store.load_all().unwrap().is_empty());
    }
}
