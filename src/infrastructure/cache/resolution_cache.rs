//! Cache-aside resolution layer in front of the mapping store.

use moka::future::Cache;
use std::sync::Arc;
use tracing::debug;

use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// Process-wide cache-aside layer for key-to-URL resolution.
///
/// Moka's `try_get_with` gives single-flight semantics: concurrent misses for
/// the same key coalesce into one store query whose result every waiter
/// shares, while different keys proceed independently.
///
/// Positive entries never expire; mappings are immutable, so a cached URL can
/// never go stale. Negative results are evicted as soon as the coalesced
/// flight completes, so a key created moments later is visible to the very
/// next lookup.
///
/// Owned explicitly and injected into the resolver rather than living in
/// ambient process state, so each test run gets a fresh instance.
pub struct ResolutionCache {
    store: Arc<dyn MappingRepository>,
    cache: Cache<String, Option<String>>,
}

impl ResolutionCache {
    /// Creates a cache in front of `store`, bounded to `max_capacity` entries.
    pub fn new(store: Arc<dyn MappingRepository>, max_capacity: u64) -> Self {
        let cache = Cache::builder().max_capacity(max_capacity).build();
        Self { store, cache }
    }

    /// Resolves a short key to its original URL.
    ///
    /// Cache hit returns immediately with no store access. On a miss, exactly
    /// one `find_by_key` runs per in-flight key; a caller's cancellation does
    /// not corrupt the flight shared by other waiters.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] when the underlying query
    /// fails; the error is shared by every coalesced waiter and nothing is
    /// cached.
    pub async fn resolve(&self, key: &str) -> Result<Option<String>, AppError> {
        let store = Arc::clone(&self.store);
        let lookup_key = key.to_string();

        let resolved = self
            .cache
            .try_get_with(key.to_string(), async move {
                debug!("cache miss for {lookup_key}, querying store");
                let mapping = store.find_by_key(&lookup_key).await?;
                Ok(mapping.map(|m| m.original_url))
            })
            .await
            .map_err(|e: Arc<AppError>| e.as_ref().clone())?;

        if resolved.is_none() {
            // Zero-duration negative entry: waiters of this flight shared the
            // miss, but the next lookup must re-query the store.
            self.cache.invalidate(key).await;
        }

        Ok(resolved)
    }
}
