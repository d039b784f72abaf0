//! Alias publishing and resolution service.

use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::error::StorageErrorKind;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Aliases that collide with fixed routes and can never be resolved.
const RESERVED_ALIASES: &[&str] = &["health"];

/// Service for saving and resolving aliases.
///
/// Works against whichever [`UrlRepository`] was selected at startup.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
}

impl UrlService {
    /// Creates a new URL service.
    pub fn new(repository: Arc<dyn UrlRepository>) -> Self {
        Self { repository }
    }

    /// Publishes `url` under `alias`.
    ///
    /// Values are passed to storage verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if either value is empty, the URL holds
    /// control characters or the alias is reserved.
    /// Returns [`AppError::Conflict`] if the alias or the URL is already saved.
    /// Returns [`AppError::Internal`] on storage faults.
    pub async fn save_url(&self, url: &str, alias: &str) -> Result<(), AppError> {
        if url.is_empty() {
            return Err(AppError::bad_request("field url is a required field"));
        }
        if alias.is_empty() {
            return Err(AppError::bad_request("field alias is a required field"));
        }
        if url.chars().any(char::is_control) {
            return Err(AppError::bad_request("field url contains control characters"));
        }
        if RESERVED_ALIASES.contains(&alias) {
            return Err(AppError::bad_request(format!("alias {} is reserved", alias)));
        }

        if let Err(e) = self.repository.save_url(url, alias).await {
            if !e.is(StorageErrorKind::Storage) {
                info!(alias, error = %e, "url not saved");
            }
            return Err(e.into());
        }

        info!(alias, url, "url added");
        Ok(())
    }

    /// Resolves `alias` to the original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if nothing is saved under the alias.
    /// Returns [`AppError::Internal`] on storage faults.
    pub async fn resolve(&self, alias: &str) -> Result<String, AppError> {
        if alias.is_empty() {
            return Err(AppError::bad_request("alias is empty"));
        }

        let url = self.repository.get_url(alias).await?;
        debug!(alias, url = %url, "alias resolved");

        Ok(url)
    }
}
