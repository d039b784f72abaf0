//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::UrlService;
use crate::config::StorageKind;

#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
    /// Backend selected at startup; reported by the health endpoint.
    pub storage: StorageKind,
}

impl AppState {
    pub fn new(url_service: Arc<UrlService>, storage: StorageKind) -> Self {
        Self {
            url_service,
            storage,
        }
    }
}
