//! CRUD operations over the book collection
//!
//! Each operation is a full read of the store, an in-memory mutation, and
//! (for mutating operations) a full rewrite. Requests are stateless and
//! independent; nothing is cached across calls.

use crate::store::{BookStore, StoreError};

use super::record::{Book, BookPatch, NewBook};

use thiserror::Error;

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors raised by the CRUD operations
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No record with the requested id
    #[error("book not found")]
    NotFound,

    /// The underlying store failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The four CRUD operations over an injected record store
pub struct BookService<S: BookStore> {
    store: S,
}

impl<S: BookStore> BookService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// List the full collection in stored order
    pub fn list(&self) -> ServiceResult<Vec<Book>> {
        Ok(self.store.load_all()?)
    }

    /// Append a new record with a server-assigned id and return it
    pub fn create(&self, new: NewBook) -> ServiceResult<Book> {
        let book = Book::create(new.fields);

        let mut books = self.store.load_all()?;
        books.push(book.clone());
        self.store.save_all(&books)?;

        Ok(book)
    }

    /// Merge a patch over the record with the given id and return the result
    pub fn update(&self, id: &str, patch: BookPatch) -> ServiceResult<Book> {
        let mut books = self.store.load_all()?;

        let book = books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or(ServiceError::NotFound)?;
        patch.apply(book);
        let updated = book.clone();

        self.store.save_all(&books)?;

        Ok(updated)
    }

    /// Remove the record with the given id
    pub fn delete(&self, id: &str) -> ServiceResult<()> {
        let mut books = self.store.load_all()?;

        let before = books.len();
        books.retain(|book| book.id != id);
        if books.len() == before {
            return Err(ServiceError::NotFound);
        }

        self.store.save_all(&books)?;

        Ok(())
    }
}
