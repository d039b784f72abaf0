//! Handler for the save endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::debug;
use validator::Validate;

use crate::api::dto::save::{SaveRequest, SaveResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Publishes a URL under a caller-chosen alias.
///
/// # Endpoint
///
/// `POST /`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "alias": "ex" }
/// ```
///
/// # Response
///
/// ```json
/// { "status": "OK", "alias": "ex" }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the body cannot be decoded or fails validation
/// - 409 Conflict if the alias or the URL is already saved
/// - 500 Internal Server Error on storage faults
pub async fn save_handler(
    State(state): State<AppState>,
    payload: Result<Json<SaveRequest>, JsonRejection>,
) -> Result<Json<SaveResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        debug!(error = %rejection, "failed to decode request body");
        AppError::bad_request("failed to decode request")
    })?;

    debug!(?payload, "request body decoded");

    payload.validate()?;

    let (Some(url), Some(alias)) = (payload.url, payload.alias) else {
        return Err(AppError::bad_request("url and alias are required"));
    };

    state.url_service.save_url(&url, &alias).await?;

    Ok(Json(SaveResponse::ok(alias)))
}
