//! Utility helpers.
//!
//! - [`db_error`] - PostgreSQL error classification

pub mod db_error;
