//! In-memory cache implementation with LRU eviction.
//!
//! Expiration is lazy: an entry past its deadline is dropped the next time it
//! is read.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::RwLock;

use todoboard_core::cache::{next_ttl, Cache, CacheEntryOptions, Result};

/// A single cache entry with its expiration bookkeeping.
#[derive(Debug, Clone)]
struct CacheEntry {
    value: Vec<u8>,
    sliding: Option<Duration>,
    absolute_deadline: Option<Instant>,
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn new(value: Vec<u8>, options: &CacheEntryOptions, now: Instant) -> Self {
        Self {
            value,
            sliding: options.sliding,
            absolute_deadline: options.absolute.map(|d| now + d),
            expires_at: options.initial_ttl().map(|d| now + d),
        }
    }

    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|exp| now >= exp)
    }

    /// Pushes the sliding deadline forward, capped by the absolute one.
    fn touch(&mut self, now: Instant) {
        let remaining = self
            .absolute_deadline
            .map(|deadline| deadline.saturating_duration_since(now));
        self.expires_at = next_ttl(self.sliding, remaining).map(|d| now + d);
    }
}

/// In-memory cache implementation with LRU eviction.
///
/// Thread-safe cache using `Arc<RwLock<LruCache>>` for concurrent access.
/// Uses LRU eviction to limit memory usage when `max_entries` is reached.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    store: Arc<RwLock<LruCache<String, CacheEntry>>>,
}

impl MemoryCache {
    /// Creates a new in-memory cache holding at most `max_entries` keys.
    ///
    /// A capacity of zero is treated as one.
    pub fn new(max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or(NonZeroUsize::MIN);
        Self {
            store: Arc::new(RwLock::new(LruCache::new(capacity))),
        }
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let now = Instant::now();
        let mut store = self.store.write().await;

        match store.get_mut(key) {
            Some(entry) if !entry.is_expired(now) => {
                entry.touch(now);
                return Ok(Some(entry.value.clone()));
            }
            Some(_) => {}
            None => return Ok(None),
        }

        store.pop(key);
        Ok(None)
    }

    async fn set(&self, key: &str, value: &[u8], options: &CacheEntryOptions) -> Result<()> {
        let entry = CacheEntry::new(value.to_vec(), options, Instant::now());
        self.store.write().await.put(key.to_string(), entry);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.store.write().await.pop(key);
        Ok(())
    }
}
