//! Application error taxonomy and HTTP translation.
//!
//! Domain and infrastructure code return typed [`AppError`] values; the
//! [`IntoResponse`] impl is the single place where they become HTTP responses:
//!
//! - [`AppError::Validation`] / [`AppError::Collision`] - reported in-band as
//!   `200 OK` with `succeeded: false` (the write path's wire contract)
//! - [`AppError::NotFound`] - `404` with a plain `NotFound` body
//! - [`AppError::StorageUnavailable`] - `500`, details stay in the logs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::dto::ShortenResponse;

/// Errors produced by the shortening and resolution paths.
///
/// Cloneable because coalesced cache lookups share one result (including the
/// error case) across all waiting callers.
#[derive(Debug, Clone, Error)]
pub enum AppError {
    /// User-correctable input problem (empty or malformed URL).
    #[error("{0}")]
    Validation(String),

    /// Two distinct URLs hash to the same short key. Nothing is stored;
    /// the first mapping wins.
    #[error("The short key is already taken by a different URL")]
    Collision { key: String },

    /// Key has no mapping. A normal negative result, not a failure.
    #[error("NotFound")]
    NotFound,

    /// Persistence collaborator unreachable or timed out. Never retried here.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(_) | AppError::Collision { .. } => {
                Json(ShortenResponse::failure(self.to_string())).into_response()
            }
            AppError::NotFound => (StatusCode::NOT_FOUND, "NotFound").into_response(),
            AppError::StorageUnavailable(reason) => {
                tracing::error!("storage unavailable: {reason}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

/// Classifies sqlx failures into the application taxonomy.
///
/// Every database-layer failure surfaces as [`AppError::StorageUnavailable`];
/// unique-key conflicts never reach this point because the repository resolves
/// them with `ON CONFLICT DO NOTHING`.
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    AppError::StorageUnavailable(e.to_string())
}
