//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use std::sync::Arc;
use std::time::Duration;

use crate::config::PostgresConfig;
use crate::domain::error::StorageError;
use crate::domain::repositories::UrlRepository;
use crate::utils::db_error::{is_unique_violation, is_unique_violation_on};

const OP_NEW: &str = "storage.postgres.New";
const OP_CREATE_TABLE: &str = "storage.postgres.New.Create";
const OP_CREATE_INDEX: &str = "storage.postgres.New.Index";
const OP_SAVE: &str = "storage.postgres.SaveURL";
const OP_GET: &str = "storage.postgres.GetURL";

/// Name PostgreSQL gives the primary key of the `url` table.
const ALIAS_CONSTRAINT: &str = "url_pkey";

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS url(
        alias TEXT NOT NULL PRIMARY KEY,
        url TEXT NOT NULL UNIQUE)
"#;

const CREATE_INDEX: &str = "CREATE INDEX IF NOT EXISTS idx_alias ON url(alias)";

/// PostgreSQL repository backed by a single `url(alias, url)` table.
///
/// Uniqueness is enforced by the table constraints; every statement runs on its
/// own in autocommit mode.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Connects to the database and bootstraps the schema.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageErrorKind::Storage`] error if the database is unreachable
    /// or the schema cannot be created. Callers should treat this as fatal.
    ///
    /// [`StorageErrorKind::Storage`]: crate::domain::error::StorageErrorKind::Storage
    pub async fn connect(config: &PostgresConfig) -> Result<Self, StorageError> {
        let ssl_mode: PgSslMode = config
            .ssl_mode
            .parse()
            .map_err(|e| StorageError::storage(OP_NEW, e))?;

        let options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.database)
            .ssl_mode(ssl_mode);

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .connect_with(options)
            .await
            .map_err(|e| StorageError::storage(OP_NEW, e))?;

        tracing::info!(host = %config.host, database = %config.database, "Connected to database");

        Self::with_pool(Arc::new(pool)).await
    }

    /// Wraps an existing pool, creating the table and index if they are missing.
    ///
    /// Safe to call on every start; both statements are `IF NOT EXISTS`.
    pub async fn with_pool(pool: Arc<PgPool>) -> Result<Self, StorageError> {
        sqlx::query(CREATE_TABLE)
            .execute(pool.as_ref())
            .await
            .map_err(|e| StorageError::storage(OP_CREATE_TABLE, e))?;

        sqlx::query(CREATE_INDEX)
            .execute(pool.as_ref())
            .await
            .map_err(|e| StorageError::storage(OP_CREATE_INDEX, e))?;

        tracing::debug!("url table ready");

        Ok(Self { pool })
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn save_url(&self, url: &str, alias: &str) -> Result<(), StorageError> {
        // Advisory only; the primary key settles races below.
        let existing = sqlx::query_scalar::<_, String>("SELECT url FROM url WHERE alias = $1")
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(|e| StorageError::storage(OP_SAVE, e))?;

        if existing.is_some() {
            return Err(StorageError::alias_exists(OP_SAVE));
        }

        let result = sqlx::query(r#"INSERT INTO url (url, alias) VALUES ($1, $2)"#)
            .bind(url)
            .bind(alias)
            .execute(self.pool.as_ref())
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation_on(&e, ALIAS_CONSTRAINT) => {
                Err(StorageError::alias_exists(OP_SAVE))
            }
            Err(e) if is_unique_violation(&e) => Err(StorageError::url_exists(OP_SAVE)),
            Err(e) => Err(StorageError::storage(OP_SAVE, e)),
        }
    }

    async fn get_url(&self, alias: &str) -> Result<String, StorageError> {
        sqlx::query_scalar::<_, String>("SELECT url FROM url WHERE alias = $1")
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(|e| StorageError::storage(OP_GET, e))?
            .ok_or_else(|| StorageError::url_not_found(OP_GET))
    }
}
