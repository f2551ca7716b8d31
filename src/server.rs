//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, cache setup, and the Axum server lifecycle.

use crate::api::routes::app_router;
use crate::application::services::{RedirectResolver, ShortenService};
use crate::config::Config;
use crate::domain::repositories::MappingRepository;
use crate::infrastructure::cache::ResolutionCache;
use crate::infrastructure::persistence::PgMappingRepository;
use crate::state::AppState;

use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Storage schema (idempotent, before any request is served)
/// - Process-wide resolution cache
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or schema initialization fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    let store: Arc<dyn MappingRepository> = Arc::new(PgMappingRepository::new(Arc::new(pool)));
    store.ensure_schema().await?;
    tracing::info!("Schema ready");

    let cache = Arc::new(ResolutionCache::new(
        Arc::clone(&store),
        config.cache_capacity,
    ));

    let state = AppState {
        shorten_service: Arc::new(ShortenService::new(Arc::clone(&store), config.base_url)),
        redirect_resolver: Arc::new(RedirectResolver::new(cache)),
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install shutdown handler: {e}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
