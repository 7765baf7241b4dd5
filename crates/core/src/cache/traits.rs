use async_trait::async_trait;

use super::{CacheEntryOptions, Result};

/// Byte-level key/value cache.
///
/// Implementations honor the sliding and absolute expiration carried by
/// [`CacheEntryOptions`]. A successful `get` counts as an access and pushes
/// the sliding deadline forward, never past the absolute one.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Gets a value from the cache by key.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Sets a value in the cache, replacing any previous entry.
    async fn set(&self, key: &str, value: &[u8], options: &CacheEntryOptions) -> Result<()>;

    /// Deletes a value from the cache by key. Missing keys are not an error.
    async fn delete(&self, key: &str) -> Result<()>;
}
