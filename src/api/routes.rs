//! API route configuration.

use crate::api::handlers::{health_handler, redirect_handler, save_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public routes.
///
/// # Endpoints
///
/// - `POST /`         - Save a URL under an alias
/// - `GET  /health`   - Liveness and active storage backend
/// - `GET  /{alias}`  - Redirect to the saved URL
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(save_handler))
        .route("/health", get(health_handler))
        .route("/{alias}", get(redirect_handler))
}
