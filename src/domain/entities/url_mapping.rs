//! The key-to-URL mapping entity.

use chrono::{DateTime, Utc};

/// A stored mapping from a short key to its original URL.
///
/// Mappings are immutable after creation: exactly one `original_url` is ever
/// associated with a given `key`, and rows are never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    /// Short key, the natural primary identifier. Unique across all mappings.
    pub key: String,
    /// Absolute http/https URL. Non-empty.
    pub original_url: String,
    /// Set once when the row is created.
    pub created_at: DateTime<Utc>,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(key: String, original_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            key,
            original_url,
            created_at,
        }
    }
}

/// Input data for creating a new mapping.
///
/// Validation (non-empty, absolute http/https) happens in the shorten service
/// before this struct is built.
#[derive(Debug, Clone)]
pub struct NewUrlMapping {
    pub key: String,
    pub original_url: String,
}
