//! HTTP contract tests for the /api/books endpoints
//!
//! Drives the router directly through tower's oneshot, asserting the
//! documented status codes, body shapes, and CORS behavior.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use bookdb::api::ApiServer;
use bookdb::books::BookService;
use bookdb::store::{JsonFileStore, MemoryStore};
use serde_json::{json, Value};
use std::collections::HashSet;
use tempfile::TempDir;
use tower::ServiceExt;

// =============================================================================
// Test Utilities
// =============================================================================

fn test_router() -> Router {
    ApiServer::new(BookService::new(MemoryStore::new())).router()
}

async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    let request = builder.body(body).unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn send_json(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send(router, method, uri, body).await;
    let value = serde_json::from_slice(&bytes).expect("response body should be JSON");
    (status, value)
}

async fn create(router: &Router, body: Value) -> Value {
    let (status, created) = send_json(router, Method::POST, "/api/books", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    created
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_returns_201_with_fresh_id() {
    let router = test_router();

    let created = create(
        &router,
        json!({"title": "Dune", "author": "Herbert", "year": "1965"}),
    )
    .await;

    let id = created["id"].as_str().unwrap();
    assert!(!id.is_empty());
    assert_eq!(created["title"], "Dune");
    assert_eq!(created["author"], "Herbert");
    assert_eq!(created["year"], "1965");
}

#[tokio::test]
async fn test_create_then_get_shows_the_exact_record() {
    let router = test_router();
    let created = create(
        &router,
        json!({"title": "Dune", "author": "Herbert", "year": "1965"}),
    )
    .await;

    let (status, listed) = send_json(&router, Method::GET, "/api/books", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([created]));
}

#[tokio::test]
async fn test_create_accepts_missing_and_extra_fields() {
    let router = test_router();

    let created = create(&router, json!({"isbn": "0441013597", "shelf": 3})).await;

    assert_eq!(created["isbn"], "0441013597");
    assert_eq!(created["shelf"], 3);
    assert!(created.get("title").is_none());
}

#[tokio::test]
async fn test_client_supplied_id_is_discarded() {
    let router = test_router();

    let created = create(&router, json!({"id": "forged", "title": "Dune"})).await;

    assert_ne!(created["id"], "forged");
}

#[tokio::test]
async fn test_create_rejects_non_object_body() {
    let router = test_router();

    let (status, _) = send(&router, Method::POST, "/api/books", Some(json!(["Dune"]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_update_merges_present_fields_only() {
    let router = test_router();
    let created = create(
        &router,
        json!({"title": "Dune", "author": "Herbert", "year": "1965"}),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let (status, updated) = send_json(
        &router,
        Method::PUT,
        &format!("/api/books/{}", id),
        Some(json!({"year": "1966"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["year"], "1966");
    assert_eq!(updated["title"], "Dune");
    assert_eq!(updated["author"], "Herbert");
    assert_eq!(updated["id"], json!(id));
}

#[tokio::test]
async fn test_update_unknown_id_is_structured_404() {
    let router = test_router();
    let created = create(&router, json!({"title": "Dune"})).await;

    let (status, body) = send_json(
        &router,
        Method::PUT,
        "/api/books/missing",
        Some(json!({"title": "X"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Book not found"}));

    // Collection unchanged
    let (_, listed) = send_json(&router, Method::GET, "/api/books", None).await;
    assert_eq!(listed, json!([created]));
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_twice_succeeds_then_404s() {
    let router = test_router();
    let created = create(&router, json!({"title": "Dune"})).await;
    let uri = format!("/api/books/{}", created["id"].as_str().unwrap());

    let (status, body) = send_json(&router, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Book deleted successfully"}));

    let (_, listed) = send_json(&router, Method::GET, "/api/books", None).await;
    assert_eq!(listed, json!([]));

    let (status, body) = send_json(&router, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Book not found"}));
}

// =============================================================================
// Routing
// =============================================================================

#[tokio::test]
async fn test_unknown_path_is_route_not_found() {
    let router = test_router();

    let (status, body) = send_json(&router, Method::GET, "/api/authors", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Route not found"}));
}

#[tokio::test]
async fn test_unknown_method_on_known_path_is_route_not_found() {
    let router = test_router();

    // Neither PUT on the collection nor GET on a single record is routed.
    let (status, body) = send_json(&router, Method::PUT, "/api/books", Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Route not found"}));

    let (status, body) = send_json(&router, Method::GET, "/api/books/some-id", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Route not found"}));
}

#[tokio::test]
async fn test_options_answers_204_anywhere() {
    let router = test_router();

    for uri in ["/api/books", "/api/books/some-id", "/anywhere/else"] {
        let (status, bytes) = send(&router, Method::OPTIONS, uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT, "OPTIONS {}", uri);
        assert!(bytes.is_empty(), "OPTIONS {} body should be empty", uri);
    }
}

#[tokio::test]
async fn test_cors_preflight_answers_204_with_allow_headers() {
    let router = test_router();

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/books")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
        .body(Body::empty())
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn test_responses_are_json_with_permissive_cors() {
    let router = test_router();

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/books")
        .header(header::ORIGIN, "http://localhost:5173")
        .body(Body::empty())
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();

    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

// =============================================================================
// Storage failures
// =============================================================================

#[tokio::test]
async fn test_store_failure_is_500_with_generic_body() {
    // A file store over an absent document fails every load; the client gets
    // the bare 500 shape, never the underlying path or I/O detail.
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("books.json"));
    let router = ApiServer::new(BookService::new(store)).router();

    let (status, body) = send_json(&router, Method::GET, "/api/books", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"message": "Internal server error"}));
}

// =============================================================================
// Identifier uniqueness
// =============================================================================

#[tokio::test]
async fn test_id_set_stays_unique_across_operations() {
    let router = test_router();

    let mut ids = Vec::new();
    for i in 0..5 {
        let created = create(&router, json!({"title": format!("Book {}", i)})).await;
        ids.push(created["id"].as_str().unwrap().to_string());
    }

    send_json(
        &router,
        Method::PUT,
        &format!("/api/books/{}", ids[1]),
        Some(json!({"title": "renamed"})),
    )
    .await;
    send_json(&router, Method::DELETE, &format!("/api/books/{}", ids[2]), None).await;

    let (_, listed) = send_json(&router, Method::GET, "/api/books", None).await;
    let listed_ids: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_str().unwrap())
        .collect();

    let unique: HashSet<&&str> = listed_ids.iter().collect();
    assert_eq!(unique.len(), listed_ids.len());
    assert_eq!(listed_ids, vec![ids[0].as_str(), ids[1].as_str(), ids[3].as_str(), ids[4].as_str()]);
}
