//! Domain layer: the mapping entity, the storage capability and its errors.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Storage capability trait
//! - [`error`] - Error taxonomy shared by every backend
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.
//! Backends in `crate::infrastructure::persistence` implement the trait defined here.

pub mod entities;
pub mod error;
pub mod repositories;
