#![allow(dead_code)]

use alias_shortener::application::services::UrlService;
use alias_shortener::config::StorageKind;
use alias_shortener::domain::repositories::UrlRepository;
use alias_shortener::infrastructure::persistence::{MemoryUrlRepository, PgUrlRepository};
use alias_shortener::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub fn create_memory_state() -> (AppState, Arc<MemoryUrlRepository>) {
    let repository = Arc::new(MemoryUrlRepository::new());
    let url_service = Arc::new(UrlService::new(repository.clone()));

    (
        AppState::new(url_service, StorageKind::Memory),
        repository,
    )
}

pub async fn create_pg_state(pool: PgPool) -> AppState {
    let repository = PgUrlRepository::with_pool(Arc::new(pool)).await.unwrap();
    let url_service = Arc::new(UrlService::new(Arc::new(repository)));

    AppState::new(url_service, StorageKind::Postgres)
}

pub async fn seed(repository: &dyn UrlRepository, url: &str, alias: &str) {
    repository.save_url(url, alias).await.unwrap();
}
