//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /`        - Save a URL under an alias
//! - `GET  /{alias}` - Redirect to the saved URL
//! - `GET  /health`  - Health check
//!
//! # Middleware
//!
//! - **Tracing** - One span per request with latency on completion
//! - **Access log** - One summary line per request
//! - **Timeout** - Requests exceeding the configured limit get `408`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{access_log, tracing};
use crate::state::AppState;
use axum::http::StatusCode;
use axum::{Router, middleware};
use std::time::Duration;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::TimeoutLayer;

/// Builds the router with all routes and middleware, without path normalization.
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    api::routes::public_routes()
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(middleware::from_fn(access_log::access_log_mw))
        .layer(tracing::layer())
}

/// Constructs the application router, trimming trailing slashes before routing.
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, request_timeout))
}
