mod common;

use alias_shortener::api::handlers::redirect_handler;
use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use serde_json::json;

#[tokio::test]
async fn test_redirect_success() {
    let (state, repository) = common::create_memory_state();
    common::seed(repository.as_ref(), "https://example.com/target", "ex").await;

    let app = Router::new()
        .route("/{alias}", get(redirect_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/ex").await;

    assert_eq!(response.status_code(), StatusCode::FOUND);
    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (state, _repository) = common::create_memory_state();

    let app = Router::new()
        .route("/{alias}", get(redirect_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/missing").await;

    response.assert_status_not_found();
    response.assert_json(&json!({ "status": "Error", "error": "not found" }));
}

#[tokio::test]
async fn test_redirect_is_repeatable() {
    let (state, repository) = common::create_memory_state();
    common::seed(repository.as_ref(), "https://example.com", "ex").await;

    let app = Router::new()
        .route("/{alias}", get(redirect_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    for _ in 0..3 {
        let response = server.get("/ex").await;
        assert_eq!(response.status_code(), StatusCode::FOUND);
        assert_eq!(response.header("location"), "https://example.com");
    }

    assert_eq!(repository.len().await, 1);
}
