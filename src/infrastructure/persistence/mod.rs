//! Repository implementations.
//!
//! The two backends are peers; the service picks one at startup and talks to it
//! only through [`crate::domain::repositories::UrlRepository`].
//!
//! # Repositories
//!
//! - [`MemoryUrlRepository`] - process-local table, no persistence
//! - [`PgUrlRepository`] - PostgreSQL `url` table

pub mod memory_url_repository;
pub mod pg_url_repository;

pub use memory_url_repository::MemoryUrlRepository;
pub use pg_url_repository::PgUrlRepository;
