//! Cache backend implementations.
//!
//! Concrete implementations of `todoboard_core::cache::Cache`, selected at
//! compile time via feature flags, plus the typed accessor the handlers use.
//!
//! # Feature Flags
//!
//! - `memory` (default): In-memory LRU cache
//! - `redis`: Redis cache using the redis crate
//!
//! These features are mutually exclusive - only one cache backend can be
//! enabled at a time.

#[cfg(all(feature = "memory", feature = "redis"))]
compile_error!(
    "Features 'memory' and 'redis' are mutually exclusive. \
    Enable only one cache backend at a time."
);

#[cfg(not(any(feature = "memory", feature = "redis")))]
compile_error!(
    "No cache backend selected. Enable 'memory' or 'redis' feature. \
    Example: cargo build -p todoboard --features memory"
);

mod accessor;

#[cfg(any(feature = "memory", test))]
pub mod memory;

#[cfg(feature = "redis")]
pub mod redis_impl;

pub use accessor::CacheAccessor;

#[cfg(test)]
pub(crate) use accessor::tests::FailingCache;

#[cfg(any(feature = "memory", test))]
pub use memory::MemoryCache;

#[cfg(feature = "redis")]
pub use redis_impl::RedisCache;
