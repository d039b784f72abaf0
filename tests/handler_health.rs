mod common;

use alias_shortener::api::handlers::health_handler;
use axum::{Router, routing::get};
use axum_test::TestServer;

#[tokio::test]
async fn test_health_endpoint_reports_backend() {
    let (state, _repository) = common::create_memory_state();
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["storage"], "memory");
    assert!(json["version"].is_string());
}
