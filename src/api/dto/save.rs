//! DTOs for the save endpoint.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::{Validate, ValidationError};

use super::response::ResponseStatus;

/// Compiled regex for alias validation.
static ALIAS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Request to publish a URL under an alias.
///
/// Both fields are optional at the wire level so that a missing field is
/// reported as a validation error rather than a decode failure.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRequest {
    /// The original URL (must be an absolute URL).
    ///
    /// Control characters are rejected up front: `url` validation tolerates
    /// them, but they cannot go into a `Location` header or a PostgreSQL
    /// `TEXT` column.
    #[validate(required, url, custom(function = "no_control_chars"))]
    pub url: Option<String>,

    /// Alias the URL is published under.
    #[validate(required, length(min = 1, max = 64), regex(path = *ALIAS_REGEX))]
    pub alias: Option<String>,
}

fn no_control_chars(value: &str) -> Result<(), ValidationError> {
    if value.chars().any(char::is_control) {
        return Err(ValidationError::new("control_chars"));
    }
    Ok(())
}

/// Response for a successful save.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub status: ResponseStatus,
    pub alias: String,
}

impl SaveResponse {
    pub fn ok(alias: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Ok,
            alias: alias.into(),
        }
    }
}
