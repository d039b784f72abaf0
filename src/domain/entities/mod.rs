//! Core domain entities.
//!
//! - [`UrlMapping`] - An original URL and the alias it is published under

pub mod url_mapping;

pub use url_mapping::UrlMapping;
