mod common;

use alias_shortener::routes::build_router;
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use std::time::Duration;

#[tokio::test]
async fn test_save_then_redirect_through_full_router() {
    let (state, _repository) = common::create_memory_state();
    let server = TestServer::new(build_router(state, Duration::from_secs(4))).unwrap();

    let response = server
        .post("/")
        .json(&json!({ "url": "https://example.com", "alias": "ex" }))
        .await;
    response.assert_status_ok();

    let response = server.get("/ex").await;
    assert_eq!(response.status_code(), StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com");

    let response = server
        .post("/")
        .json(&json!({ "url": "https://other.com", "alias": "ex" }))
        .await;
    response.assert_status(StatusCode::CONFLICT);

    server.get("/missing").await.assert_status_not_found();
}

#[tokio::test]
async fn test_health_route_wins_over_alias_route() {
    let (state, _repository) = common::create_memory_state();
    let server = TestServer::new(build_router(state, Duration::from_secs(4))).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["status"], "healthy");
}

#[tokio::test]
async fn test_url_with_newline_never_reaches_redirect() {
    let (state, repository) = common::create_memory_state();
    let server = TestServer::new(build_router(state, Duration::from_secs(4))).unwrap();

    let response = server
        .post("/")
        .json(&json!({ "url": "https://example.com/a\nb", "alias": "nl" }))
        .await;
    response.assert_status_bad_request();
    response.assert_json(&json!({
        "status": "Error",
        "error": "field url contains control characters"
    }));

    server.get("/nl").await.assert_status_not_found();
    assert!(repository.is_empty().await);
}
