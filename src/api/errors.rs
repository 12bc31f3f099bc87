//! API error types
//!
//! Every error renders as a JSON `{"message": ...}` body. Store failures are
//! logged with their detail and surface to clients as a bare 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::books::ServiceError;
use crate::observability::Logger;

use super::response::MessageResponse;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// No record with the requested id
    #[error("Book not found")]
    NotFound,

    /// No route matches the request
    #[error("Route not found")]
    RouteNotFound,

    /// The request body is not a JSON object
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// The store failed; detail is logged, not leaked
    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound => ApiError::NotFound,
            ServiceError::Store(store_err) => {
                Logger::error("store_failure", &[("detail", &store_err.to_string())]);
                ApiError::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(MessageResponse::new(self.to_string()));
        (status, body).into_response()
    }
}
