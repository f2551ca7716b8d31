//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short key to its original URL.
///
/// # Endpoint
///
/// `GET /{key}`
///
/// Resolution goes through the process-wide cache (cache-aside with per-key
/// request coalescing). A hit answers `301 Moved Permanently` with the
/// `Location` header set; mappings are immutable, so clients may cache the
/// redirect. An unknown key answers `404` with a plain `NotFound` body.
pub async fn redirect_handler(
    Path(key): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    match state.redirect_resolver.resolve(&key).await? {
        Some(target) => {
            debug!("redirecting {key} to {}", target.url);
            Ok((
                StatusCode::MOVED_PERMANENTLY,
                [(header::LOCATION, target.url)],
            )
                .into_response())
        }
        None => Err(AppError::NotFound),
    }
}
