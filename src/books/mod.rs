//! Book domain for bookdb
//!
//! The `Book` record, the request body types, and the `BookService` that
//! implements the four CRUD operations as read-modify-write passes over a
//! `BookStore`.

mod record;
mod service;

pub use record::{Book, BookPatch, NewBook};
pub use service::{BookService, ServiceError, ServiceResult};
