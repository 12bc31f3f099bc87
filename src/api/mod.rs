//! HTTP API for bookdb
//!
//! Axum router exposing the four CRUD operations under `/api/books`, with
//! permissive CORS and structured JSON error bodies.

mod errors;
mod response;
mod server;

pub use errors::{ApiError, ApiResult};
pub use response::MessageResponse;
pub use server::ApiServer;
