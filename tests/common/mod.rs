#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use linkmap::api::routes::app_router;
use linkmap::application::services::{RedirectResolver, ShortenService};
use linkmap::domain::entities::NewUrlMapping;
use linkmap::domain::repositories::MappingRepository;
use linkmap::infrastructure::cache::ResolutionCache;
use linkmap::infrastructure::persistence::MemoryMappingRepository;
use linkmap::state::AppState;

pub const BASE_URL: &str = "https://short.example";

/// Builds a fresh application state over an in-memory store.
///
/// The store handle is returned alongside so tests can seed rows or assert
/// on what was persisted.
pub fn create_test_state() -> (AppState, Arc<MemoryMappingRepository>) {
    let repo = Arc::new(MemoryMappingRepository::new());
    let store: Arc<dyn MappingRepository> = repo.clone();

    let cache = Arc::new(ResolutionCache::new(Arc::clone(&store), 1_000));

    let state = AppState {
        shorten_service: Arc::new(ShortenService::new(Arc::clone(&store), BASE_URL)),
        redirect_resolver: Arc::new(RedirectResolver::new(cache)),
    };

    (state, repo)
}

pub fn create_test_server() -> (TestServer, Arc<MemoryMappingRepository>) {
    let (state, repo) = create_test_state();
    let server = TestServer::new(app_router(state)).unwrap();
    (server, repo)
}

pub async fn seed_mapping(repo: &MemoryMappingRepository, key: &str, url: &str) {
    repo.insert(NewUrlMapping {
        key: key.to_string(),
        original_url: url.to_string(),
    })
    .await
    .unwrap();
}
