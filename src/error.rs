//! HTTP-facing error type.
//!
//! Every error leaves the service as `{ "status": "Error", "error": "<message>" }`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::{ValidationErrors, ValidationErrorsKind};

use crate::api::dto::response::ErrorResponse;
use crate::domain::error::{StorageError, StorageErrorKind};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String },
    #[error("{message}")]
    NotFound { message: String },
    #[error("{message}")]
    Conflict { message: String },
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

/// Maps storage outcomes onto HTTP errors.
///
/// Generic storage failures are logged with their cause and reported without it.
impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err.kind() {
            StorageErrorKind::UrlNotFound => AppError::not_found("not found"),
            StorageErrorKind::AliasExists => AppError::conflict("alias already exists"),
            StorageErrorKind::UrlExists => AppError::conflict("url already exists"),
            StorageErrorKind::Storage => {
                tracing::error!(error = ?err, "storage failure");
                AppError::internal("internal error")
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.errors().iter().collect();
        fields.sort_by(|a, b| a.0.cmp(b.0));

        let messages: Vec<String> = fields
            .into_iter()
            .filter_map(|(field, kind)| match kind {
                ValidationErrorsKind::Field(errs) => errs
                    .first()
                    .map(|e| describe_field_error(field, &e.code)),
                _ => None,
            })
            .collect();

        if messages.is_empty() {
            return AppError::bad_request("invalid request");
        }

        AppError::bad_request(messages.join(", "))
    }
}

fn describe_field_error(field: &str, code: &str) -> String {
    match code {
        "required" => format!("field {} is a required field", field),
        "url" => format!("field {} is not a valid URL", field),
        "length" => format!("field {} has invalid length", field),
        "regex" => format!("field {} contains invalid characters", field),
        "control_chars" => format!("field {} contains control characters", field),
        _ => format!("field {} is not valid", field),
    }
}
