//! Storage capability for URL mappings.

use crate::domain::error::StorageError;
use async_trait::async_trait;

/// Repository interface for saving and resolving aliases.
///
/// Every backend enforces the same contract: an alias maps to at most one URL
/// and a URL is published under at most one alias, even when calls race.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - process-local table
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL `url` table
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Saves `url` under `alias`.
    ///
    /// # Errors
    ///
    /// Checked in this order, first match wins:
    ///
    /// 1. [`StorageErrorKind::AliasExists`] if the alias is already taken
    /// 2. [`StorageErrorKind::UrlExists`] if the URL is already saved under another alias
    /// 3. [`StorageErrorKind::Storage`] on any underlying fault
    ///
    /// [`StorageErrorKind::AliasExists`]: crate::domain::error::StorageErrorKind::AliasExists
    /// [`StorageErrorKind::UrlExists`]: crate::domain::error::StorageErrorKind::UrlExists
    /// [`StorageErrorKind::Storage`]: crate::domain::error::StorageErrorKind::Storage
    async fn save_url(&self, url: &str, alias: &str) -> Result<(), StorageError>;

    /// Returns the original URL saved under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageErrorKind::UrlNotFound`] when nothing is saved under the
    /// alias, [`StorageErrorKind::Storage`] on underlying faults.
    ///
    /// [`StorageErrorKind::UrlNotFound`]: crate::domain::error::StorageErrorKind::UrlNotFound
    /// [`StorageErrorKind::Storage`]: crate::domain::error::StorageErrorKind::Storage
    async fn get_url(&self, alias: &str) -> Result<String, StorageError>;
}
