//! HTTP server initialization and runtime setup.
//!
//! Selects the storage backend, builds the shared state and runs the Axum server
//! until a shutdown signal arrives.

use crate::application::services::UrlService;
use crate::config::{Config, StorageKind};
use crate::domain::repositories::UrlRepository;
use crate::infrastructure::persistence::{MemoryUrlRepository, PgUrlRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Creates the repository for the configured backend.
///
/// # Errors
///
/// Returns an error if PostgreSQL is selected and the database is unreachable or
/// the schema cannot be created. The process should not start in that case.
pub async fn init_storage(config: &Config) -> Result<Arc<dyn UrlRepository>> {
    match config.storage {
        StorageKind::Memory => {
            tracing::info!("Storage: in-memory (mappings are lost on restart)");
            Ok(Arc::new(MemoryUrlRepository::new()))
        }
        StorageKind::Postgres => {
            let pg = config
                .postgres
                .as_ref()
                .context("PostgreSQL storage selected without connection settings")?;

            let repository = PgUrlRepository::connect(pg)
                .await
                .context("failed to init storage")?;

            tracing::info!("Storage: PostgreSQL");
            Ok(Arc::new(repository))
        }
    }
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Storage initialization fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = init_storage(&config).await?;

    let url_service = Arc::new(UrlService::new(repository));
    let state = AppState::new(url_service, config.storage);

    let app = app_router(state, Duration::from_secs(config.request_timeout_secs));

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
