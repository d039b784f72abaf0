//! In-memory implementation of the URL repository.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use tokio::sync::Mutex;

use crate::domain::entities::UrlMapping;
use crate::domain::error::StorageError;
use crate::domain::repositories::UrlRepository;

const OP_SAVE: &str = "storage.memory.SaveURL";
const OP_GET: &str = "storage.memory.GetURL";

#[derive(Debug, Default)]
struct Table {
    by_alias: HashMap<String, UrlMapping>,
    urls: HashSet<String>,
}

/// Process-local repository. Mappings live until the process exits.
///
/// The table is keyed by alias with a reverse set of saved URLs, and a single
/// mutex is held across each check-then-insert so uniqueness survives races.
#[derive(Debug, Default)]
pub struct MemoryUrlRepository {
    table: Mutex<Table>,
}

impl MemoryUrlRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored mappings.
    pub async fn len(&self) -> usize {
        self.table.lock().await.by_alias.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn save_url(&self, url: &str, alias: &str) -> Result<(), StorageError> {
        let mut table = self.table.lock().await;

        if table.by_alias.contains_key(alias) {
            return Err(StorageError::alias_exists(OP_SAVE));
        }

        if table.urls.contains(url) {
            return Err(StorageError::url_exists(OP_SAVE));
        }

        table.urls.insert(url.to_owned());
        table
            .by_alias
            .insert(alias.to_owned(), UrlMapping::new(url, alias));

        Ok(())
    }

    async fn get_url(&self, alias: &str) -> Result<String, StorageError> {
        let table = self.table.lock().await;

        table
            .by_alias
            .get(alias)
            .map(|mapping| mapping.url.clone())
            .ok_or_else(|| StorageError::url_not_found(OP_GET))
    }
}
