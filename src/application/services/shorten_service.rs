//! URL shortening service: the write path.

use std::sync::Arc;
use tracing::info;
use url::Url;

use crate::domain::entities::NewUrlMapping;
use crate::domain::repositories::{InsertOutcome, MappingRepository};
use crate::error::AppError;
use crate::utils::key_codec;

const EMPTY_URL_MESSAGE: &str = "The URL cannot be empty";
const MALFORMED_URL_MESSAGE: &str = "Please enter the URL in the correct format";

/// Service for creating short URLs.
///
/// The short key is derived deterministically from the URL, so resubmitting
/// the same URL reproduces the same key and deduplication is a plain store
/// lookup. The store's unique-key constraint is the sole concurrency guard on
/// the write path.
pub struct ShortenService {
    store: Arc<dyn MappingRepository>,
    base_url: String,
}

impl ShortenService {
    /// Creates a new shorten service composing short URLs on `base_url`.
    pub fn new(store: Arc<dyn MappingRepository>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { store, base_url }
    }

    /// Shortens `original_url`, returning the full short URL.
    ///
    /// Resubmitting an already-shortened URL is idempotent: the existing
    /// short URL is returned and no new row is written. At most one durable
    /// insert happens per distinct new URL, even under concurrent callers.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] - empty input, or not an absolute
    ///   http/https URL
    /// - [`AppError::Collision`] - a different URL already owns the derived
    ///   key; nothing is stored
    /// - [`AppError::StorageUnavailable`] - the store cannot be reached
    pub async fn shorten(&self, original_url: &str) -> Result<String, AppError> {
        if original_url.is_empty() {
            return Err(AppError::Validation(EMPTY_URL_MESSAGE.to_string()));
        }

        let parsed = Url::parse(original_url)
            .map_err(|_| AppError::Validation(MALFORMED_URL_MESSAGE.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AppError::Validation(MALFORMED_URL_MESSAGE.to_string()));
        }

        let key = key_codec::encode(original_url);

        match self.store.find_by_key(&key).await? {
            Some(existing) if existing.original_url == original_url => {
                Ok(self.short_url(&key))
            }
            Some(_) => Err(AppError::Collision { key }),
            None => self.insert_new(key, original_url).await,
        }
    }

    /// Composes the full short URL for a key.
    pub fn short_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url, key)
    }

    async fn insert_new(&self, key: String, original_url: &str) -> Result<String, AppError> {
        let new_mapping = NewUrlMapping {
            key: key.clone(),
            original_url: original_url.to_string(),
        };

        match self.store.insert(new_mapping).await? {
            InsertOutcome::Inserted(_) => {
                info!("shortened {original_url} as {key}");
                Ok(self.short_url(&key))
            }
            // Lost an insert race; the winning row decides between idempotent
            // resubmission and collision.
            InsertOutcome::AlreadyExists => match self.store.find_by_key(&key).await? {
                Some(existing) if existing.original_url == original_url => {
                    Ok(self.short_url(&key))
                }
                Some(_) => Err(AppError::Collision { key }),
                // Rows are never deleted, so a vanished winner means the
                // store is misbehaving.
                None => Err(AppError::StorageUnavailable(format!(
                    "mapping for key '{key}' disappeared after conflicting insert"
                ))),
            },
        }
    }
}
