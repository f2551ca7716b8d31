//! Route configuration.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler};
use crate::state::AppState;

/// Builds the application router.
///
/// # Endpoints
///
/// - `POST /api/v1/shorten` - create a short URL
/// - `GET  /{key}`          - resolve a short key and redirect
/// - `GET  /healthz`        - liveness probe
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/shorten", post(shorten_handler))
        .route("/healthz", get(health_handler))
        .route("/{key}", get(redirect_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
