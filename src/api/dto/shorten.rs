//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/v1/shorten`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// The URL to shorten. Absent and empty are both rejected as empty input.
    #[serde(default)]
    pub original_url: Option<String>,
}

/// Response body for `POST /api/v1/shorten`.
///
/// Failures on this endpoint are reported in-band: the HTTP status stays
/// `200` and `succeeded`/`message` carry the outcome.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub succeeded: bool,
    pub message: Option<String>,
    /// The full short URL (`{base url}/{key}`) on success.
    pub data: Option<String>,
}

impl ShortenResponse {
    /// Successful result carrying the short URL.
    pub fn success(short_url: String) -> Self {
        Self {
            succeeded: true,
            message: None,
            data: Some(short_url),
        }
    }

    /// In-band failure with a human-readable message.
    pub fn failure(message: String) -> Self {
        Self {
            succeeded: false,
            message: Some(message),
            data: None,
        }
    }
}
