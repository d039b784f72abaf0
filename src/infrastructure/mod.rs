//! Infrastructure layer implementing the domain's storage capability.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory and PostgreSQL repositories

pub mod persistence;
