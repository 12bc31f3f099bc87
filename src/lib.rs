//! bookdb - a minimal, self-hostable book record service
//!
//! A single collection of book records persisted as one JSON document,
//! exposed over an HTTP/JSON CRUD API.

pub mod api;
pub mod books;
pub mod cli;
pub mod config;
pub mod observability;
pub mod store;
