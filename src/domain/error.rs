//! Storage error taxonomy shared by every [`UrlRepository`] backend.
//!
//! Callers branch on [`StorageError::kind`], never on the rendered message.
//!
//! [`UrlRepository`]: crate::domain::repositories::UrlRepository

use std::error::Error as StdError;
use std::fmt;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Category of a storage failure.
///
/// The first three are expected domain outcomes. [`StorageErrorKind::Storage`]
/// covers everything else (connection loss, driver errors, bad SQL) and always
/// carries its underlying cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageErrorKind {
    UrlNotFound,
    UrlExists,
    AliasExists,
    Storage,
}

impl fmt::Display for StorageErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::UrlNotFound => "url not found",
            Self::UrlExists => "url exists",
            Self::AliasExists => "alias exists",
            Self::Storage => "storage failure",
        };
        f.write_str(msg)
    }
}

/// Error returned by storage operations.
///
/// Carries the error kind, the label of the operation that failed
/// (e.g. `storage.memory.SaveURL`) and, for generic failures, the cause.
///
/// Generic failures append the cause to the rendered message.
#[derive(Debug, thiserror::Error)]
#[error("{op}: {kind}{}", render_cause(.source))]
pub struct StorageError {
    kind: StorageErrorKind,
    op: &'static str,
    #[source]
    source: Option<BoxError>,
}

fn render_cause(source: &Option<BoxError>) -> String {
    match source {
        Some(cause) => format!(": {}", cause),
        None => String::new(),
    }
}

impl StorageError {
    /// Creates a domain error without an underlying cause.
    pub fn new(kind: StorageErrorKind, op: &'static str) -> Self {
        Self {
            kind,
            op,
            source: None,
        }
    }

    pub fn url_not_found(op: &'static str) -> Self {
        Self::new(StorageErrorKind::UrlNotFound, op)
    }

    pub fn url_exists(op: &'static str) -> Self {
        Self::new(StorageErrorKind::UrlExists, op)
    }

    pub fn alias_exists(op: &'static str) -> Self {
        Self::new(StorageErrorKind::AliasExists, op)
    }

    /// Wraps an underlying fault as a generic storage error.
    pub fn storage(op: &'static str, cause: impl Into<BoxError>) -> Self {
        Self {
            kind: StorageErrorKind::Storage,
            op,
            source: Some(cause.into()),
        }
    }

    pub fn kind(&self) -> StorageErrorKind {
        self.kind
    }

    pub fn op(&self) -> &'static str {
        self.op
    }

    pub fn is(&self, kind: StorageErrorKind) -> bool {
        self.kind == kind
    }
}
