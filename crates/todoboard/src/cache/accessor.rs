//! Typed, best-effort access to the cache.
//!
//! Every cache failure is logged and absorbed here: a failed read is a miss
//! and a failed write or delete is a no-op. Requests never fail because the
//! cache is unhealthy.

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};

use todoboard_core::cache::{deserialize, serialize, Cache, CacheEntryOptions};

/// Cache-aside helper over a byte-level [`Cache`].
#[derive(Clone)]
pub struct CacheAccessor {
    cache: Arc<dyn Cache>,
}

impl CacheAccessor {
    pub fn new(cache: Arc<dyn Cache>) -> Self {
        Self { cache }
    }

    /// Returns the cached value for `key`, or `None` on a miss or any failure.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let bytes = match self.cache.get(key).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                tracing::trace!(key, "Cache miss");
                return None;
            }
            Err(err) => {
                tracing::warn!(key, error = %err, "Cache read failed, falling back to storage");
                return None;
            }
        };

        match deserialize(&bytes) {
            Ok(value) => {
                tracing::trace!(key, "Cache hit");
                Some(value)
            }
            Err(err) => {
                tracing::warn!(key, error = %err, "Discarding unreadable cache entry");
                None
            }
        }
    }

    /// Stores `value` under `key`. Failures are logged and ignored.
    pub async fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T, options: &CacheEntryOptions) {
        let bytes = match serialize(value) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(key, error = %err, "Failed to serialize cache entry");
                return;
            }
        };

        if let Err(err) = self.cache.set(key, &bytes, options).await {
            tracing::warn!(key, error = %err, "Cache write failed");
        }
    }

    /// Deletes `key`. Failures are logged and ignored.
    pub async fn remove(&self, key: &str) {
        if let Err(err) = self.cache.delete(key).await {
            tracing::warn!(key, error = %err, "Cache invalidation failed");
        }
    }
}
