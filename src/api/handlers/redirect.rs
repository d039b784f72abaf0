//! Handler for alias redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its original URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// Responds with `302 Found` and the original URL in `Location`.
///
/// # Errors
///
/// Returns 404 Not Found if nothing is saved under the alias.
/// Returns 500 Internal Server Error on storage faults.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let url = state.url_service.resolve(&alias).await?;

    tracing::info!(alias = %alias, url = %url, "redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, url)]).into_response())
}
