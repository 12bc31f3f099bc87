//! # HTTP Server
//!
//! Axum router and handlers for the `/api/books` CRUD endpoints.
//!
//! Dispatch contract:
//! - `OPTIONS` anywhere answers 204 with no body
//! - the four (method, path) pairs below reach their handlers
//! - everything else answers 404 `{"message":"Route not found"}`

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, Request, State};
use axum::http::{header, Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::books::{Book, BookPatch, BookService, NewBook};
use crate::observability::Logger;
use crate::store::BookStore;

use super::errors::{ApiError, ApiResult};
use super::response::MessageResponse;

/// HTTP server over a book service
pub struct ApiServer<S: BookStore> {
    service: Arc<BookService<S>>,
}

/// Shared state type
type ServerState<S> = Arc<BookService<S>>;

impl<S: BookStore + 'static> ApiServer<S> {
    pub fn new(service: BookService<S>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Build the Axum router
    pub fn router(self) -> Router {
        // Permissive CORS: any origin, the four CRUD verbs, Content-Type.
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE]);

        Router::new()
            .route(
                "/api/books",
                get(list_handler::<S>)
                    .post(create_handler::<S>)
                    .options(preflight_handler)
                    .fallback(unmatched_handler),
            )
            .route(
                "/api/books/:id",
                put(update_handler::<S>)
                    .delete(delete_handler::<S>)
                    .options(preflight_handler)
                    .fallback(unmatched_handler),
            )
            .fallback(unmatched_handler)
            .layer(cors)
            // Outermost so it also sees responses the CORS layer produced.
            .layer(middleware::from_fn(options_status))
            .with_state(self.service)
    }

    /// Bind the address and serve until the process exits
    pub async fn serve(self, addr: SocketAddr) -> Result<(), std::io::Error> {
        let router = self.router();
        let listener = TcpListener::bind(addr).await?;

        Logger::info("server_listening", &[("addr", &addr.to_string())]);

        axum::serve(listener, router).await
    }
}

/// Parse a request body that must be a JSON object
fn parse_body<T: DeserializeOwned>(body: Value) -> ApiResult<T> {
    serde_json::from_value(body).map_err(|e| ApiError::InvalidBody(e.to_string()))
}

/// CORS preflight on the known routes
async fn preflight_handler() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Force every OPTIONS answer to 204.
///
/// The CORS layer intercepts real preflights (Origin plus
/// Access-Control-Request-Method) and answers 200 with an empty body; the
/// contract says OPTIONS anywhere is 204. Rewriting the status here keeps
/// the allow-* headers the layer attached.
async fn options_status(request: Request, next: Next) -> Response {
    let is_options = request.method() == Method::OPTIONS;
    let mut response = next.run(request).await;
    if is_options && response.status() == StatusCode::OK {
        *response.status_mut() = StatusCode::NO_CONTENT;
    }
    response
}

/// Anything the dispatch table does not name.
///
/// Bare `OPTIONS` still answers 204 so preflights on unknown paths succeed.
async fn unmatched_handler(method: Method) -> Response {
    if method == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        ApiError::RouteNotFound.into_response()
    }
}

/// GET /api/books
async fn list_handler<S: BookStore + 'static>(
    State(service): State<ServerState<S>>,
) -> ApiResult<Json<Vec<Book>>> {
    Ok(Json(service.list()?))
}

/// POST /api/books
async fn create_handler<S: BookStore + 'static>(
    State(service): State<ServerState<S>>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<Book>)> {
    let new: NewBook = parse_body(body)?;
    let book = service.create(new)?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// PUT /api/books/{id}
async fn update_handler<S: BookStore + 'static>(
    State(service): State<ServerState<S>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Book>> {
    let patch: BookPatch = parse_body(body)?;
    let book = service.update(&id, patch)?;
    Ok(Json(book))
}

/// DELETE /api/books/{id}
async fn delete_handler<S: BookStore + 'static>(
    State(service): State<ServerState<S>>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    service.delete(&id)?;
    Ok(Json(MessageResponse::book_deleted()))
}
