//! Application layer services implementing business logic.
//!
//! Services sit between the HTTP handlers and the storage capability. They hold
//! an `Arc<dyn UrlRepository>` and never know which backend is behind it.
//!
//! # Available Services
//!
//! - [`services::url_service::UrlService`] - Alias publishing and resolution

pub mod services;
