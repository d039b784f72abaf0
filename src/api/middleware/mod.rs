//! HTTP middleware for request processing.
//!
//! Provides request tracing and access logging.

pub mod access_log;
pub mod tracing;
