//! Observability for bookdb
//!
//! Structured one-line JSON logging only; no metrics or tracing layers.

mod logger;

pub use logger::{Logger, Severity};
