//! Redis cache implementation.
//!
//! Each entry is a hash with three fields:
//!
//! - `data`: the cached bytes
//! - `absexp`: absolute deadline in unix milliseconds, or -1
//! - `sldexp`: sliding window in milliseconds, or -1
//!
//! The key's own `PEXPIRE` always holds the shorter of the sliding window and
//! the time left before `absexp`, so Redis evicts the entry on its own. Reads
//! renew the TTL.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use redis::AsyncCommands;

use todoboard_core::cache::{next_ttl, Cache, CacheEntryOptions, Result};

use super::error::map_redis_error;

const DATA_FIELD: &str = "data";
const ABSOLUTE_FIELD: &str = "absexp";
const SLIDING_FIELD: &str = "sldexp";
const NOT_PRESENT: i64 = -1;

/// Redis cache backend using connection manager for pooling.
pub struct RedisCache {
    conn: redis::aio::ConnectionManager,
    instance_name: String,
}

impl RedisCache {
    /// Creates a new Redis cache connection.
    ///
    /// Every key is prefixed with `instance_name` so several deployments can
    /// share one Redis database.
    ///
    /// # Errors
    ///
    /// Returns `CacheError::ConnectionFailed` if the connection cannot be established.
    pub async fn new(url: &str, instance_name: impl Into<String>) -> Result<Self> {
        let client = redis::Client::open(url).map_err(map_redis_error)?;
        let conn = redis::aio::ConnectionManager::new(client)
            .await
            .map_err(map_redis_error)?;
        Ok(Self {
            conn,
            instance_name: instance_name.into(),
        })
    }

    fn prefixed(&self, key: &str) -> String {
        format!("{}{}", self.instance_name, key)
    }
}

fn unix_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}

fn millis(duration: Duration) -> i64 {
    duration.as_millis().max(1) as i64
}

/// Returns the TTL to apply after a read, or `None` to leave it untouched.
fn refreshed_ttl(absexp: Option<i64>, sldexp: Option<i64>, now: i64) -> Option<Duration> {
    let sliding = sldexp
        .filter(|ms| *ms >= 0)
        .map(|ms| Duration::from_millis(ms as u64))?;
    let remaining = absexp
        .filter(|ms| *ms >= 0)
        .map(|deadline| Duration::from_millis((deadline - now).max(0) as u64));
    next_ttl(Some(sliding), remaining)
}

#[async_trait]
impl Cache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let key = self.prefixed(key);
        let mut conn = self.conn.clone();

        let (data, absexp, sldexp): (Option<Vec<u8>>, Option<i64>, Option<i64>) = conn
            .hget(&key, &[DATA_FIELD, ABSOLUTE_FIELD, SLIDING_FIELD])
            .await
            .map_err(map_redis_error)?;

        let Some(data) = data else {
            return Ok(None);
        };

        match refreshed_ttl(absexp, sldexp, unix_millis()) {
            Some(ttl) if ttl.is_zero() => return Ok(None),
            Some(ttl) => {
                conn.pexpire::<_, ()>(&key, millis(ttl))
                    .await
                    .map_err(map_redis_error)?;
            }
            None => {}
        }

        Ok(Some(data))
    }

    async fn set(&self, key: &str, value: &[u8], options: &CacheEntryOptions) -> Result<()> {
        let key = self.prefixed(key);
        let mut conn = self.conn.clone();

        let absexp = options
            .absolute
            .map(|d| unix_millis() + millis(d))
            .unwrap_or(NOT_PRESENT);
        let sldexp = options.sliding.map(millis).unwrap_or(NOT_PRESENT);

        let mut pipe = redis::pipe();
        pipe.atomic()
            .del(&key)
            .ignore()
            .hset(&key, DATA_FIELD, value)
            .ignore()
            .hset_multiple(&key, &[(ABSOLUTE_FIELD, absexp), (SLIDING_FIELD, sldexp)])
            .ignore();
        if let Some(ttl) = options.initial_ttl() {
            pipe.pexpire(&key, millis(ttl)).ignore();
        }

        let _: () = pipe
            .query_async(&mut conn)
            .await
            .map_err(map_redis_error)?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(self.prefixed(key))
            .await
            .map_err(map_redis_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to get Redis URL from environment.
    fn redis_url() -> String {
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string())
    }

    /// Skip test if Redis not available.
    async fn get_test_cache() -> Option<RedisCache> {
        let instance = format!("test:{}:", std::process::id());
        RedisCache::new(&redis_url(), instance).await.ok()
    }

    #[test]
    fn test_refreshed_ttl_without_sliding_is_untouched() {
        assert_eq!(refreshed_ttl(Some(10_000), Some(NOT_PRESENT), 0), None);
        assert_eq!(refreshed_ttl(None, None, 0), None);
    }

    #[test]
    fn test_refreshed_ttl_is_capped_by_absolute() {
        assert_eq!(
            refreshed_ttl(Some(1_500), Some(10_000), 1_000),
            Some(Duration::from_millis(500))
        );
        assert_eq!(
            refreshed_ttl(Some(NOT_PRESENT), Some(10_000), 1_000),
            Some(Duration::from_secs(10))
        );
    }

    #[test]
    fn test_refreshed_ttl_past_deadline_is_zero() {
        assert_eq!(
            refreshed_ttl(Some(500), Some(10_000), 1_000),
            Some(Duration::ZERO)
        );
    }

    #[tokio::test]
    async fn test_redis_set_and_get() {
        let Some(cache) = get_test_cache().await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };

        let options = CacheEntryOptions::default().with_absolute(Duration::from_secs(60));
        cache.set("set_get", b"hello world", &options).await.unwrap();

        let result = cache.get("set_get").await.unwrap();
        assert_eq!(result, Some(b"hello world".to_vec()));

        cache.delete("set_get").await.unwrap();
    }

    #[tokio::test]
    async fn test_redis_delete() {
        let Some(cache) = get_test_cache().await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };

        let options = CacheEntryOptions::default().with_absolute(Duration::from_secs(60));
        cache.set("delete", b"to be deleted", &options).await.unwrap();
        assert!(cache.get("delete").await.unwrap().is_some());

        cache.delete("delete").await.unwrap();
        assert!(cache.get("delete").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_redis_sliding_expiration() {
        let Some(cache) = get_test_cache().await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };

        let options = CacheEntryOptions::default()
            .with_sliding(Duration::from_millis(300))
            .with_absolute(Duration::from_secs(60));
        cache.set("sliding", b"value", &options).await.unwrap();

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(cache.get("sliding").await.unwrap().is_some());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(cache.get("sliding").await.unwrap().is_some());

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(cache.get("sliding").await.unwrap().is_none());
    }
}
