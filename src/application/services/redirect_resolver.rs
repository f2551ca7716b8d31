//! Redirect resolution service: the read path.

use std::sync::Arc;

use crate::error::AppError;
use crate::infrastructure::cache::ResolutionCache;

/// A resolved redirect destination.
///
/// Mappings are immutable, so the redirect is permanent and clients may cache
/// it per normal HTTP semantics (`301 Moved Permanently` at the boundary).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTarget {
    pub url: String,
}

/// Service resolving short keys to redirect targets through the cache.
pub struct RedirectResolver {
    cache: Arc<ResolutionCache>,
}

impl RedirectResolver {
    /// Creates a resolver over the shared resolution cache.
    pub fn new(cache: Arc<ResolutionCache>) -> Self {
        Self { cache }
    }

    /// Resolves `key` to its redirect target.
    ///
    /// An empty key is a `None` immediately, with no cache or store access.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] when the backing store query
    /// fails.
    pub async fn resolve(&self, key: &str) -> Result<Option<RedirectTarget>, AppError> {
        if key.is_empty() {
            return Ok(None);
        }

        let url = self.cache.resolve(key).await?;
        Ok(url.map(|url| RedirectTarget { url }))
    }
}
