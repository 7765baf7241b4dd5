//! In-memory cache backend implementation.
//!
//! Provides a thread-safe LRU cache with sliding and absolute expiration
//! for single-instance deployments.

mod cache;

pub use cache::MemoryCache;
