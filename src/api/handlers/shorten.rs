//! Handler for the shorten endpoint.

use axum::{Json, extract::State};

use crate::api::dto::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for a long URL.
///
/// # Endpoint
///
/// `POST /api/v1/shorten`
///
/// # Request Body
///
/// ```json
/// { "originalUrl": "https://example.com/very/long/path" }
/// ```
///
/// # Response
///
/// ```json
/// { "succeeded": true, "message": null, "data": "https://short.example/ab12" }
/// ```
///
/// Validation and collision failures come back as `200` with
/// `succeeded: false` and an explanatory `message`; only storage failures
/// produce a server error status.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    let original_url = payload.original_url.unwrap_or_default();

    let short_url = state.shorten_service.shorten(&original_url).await?;
    Ok(Json(ShortenResponse::success(short_url)))
}
