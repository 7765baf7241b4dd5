//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. Storage and cache are trait objects chosen at compile
//! time via feature flags; see the factory modules at the bottom.

use std::sync::Arc;

use axum::extract::FromRef;

use todoboard_auth::AuthState;
use todoboard_core::cache::{Cache, CacheEntryOptions};
use todoboard_core::storage::{ClipboardRepository, ItemRepository};

use crate::cache::CacheAccessor;
use crate::config::Config;
use crate::services::{ClipboardService, ItemService};

/// Shared application state.
///
/// This is cloned for each request handler. Every field is a cheap handle.
#[derive(Clone)]
pub struct AppState {
    /// Clipboard operations.
    pub clipboards: ClipboardService,
    /// Item operations.
    pub items: ItemService,
    /// Best-effort cache for list reads.
    pub cache: CacheAccessor,
    /// Expiration policy for cached lists.
    pub cache_options: CacheEntryOptions,
    /// Bearer token validation.
    pub auth: AuthState,
}

impl FromRef<AppState> for AuthState {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}

impl AppState {
    /// Creates a new AppState with the given backends and configuration.
    fn build<R>(repo: Arc<R>, cache: Arc<dyn Cache>, auth: AuthState, config: &Config) -> Self
    where
        R: ClipboardRepository + ItemRepository + 'static,
    {
        let clipboard_repo: Arc<dyn ClipboardRepository> = repo.clone();
        let item_repo: Arc<dyn ItemRepository> = repo;

        Self {
            clipboards: ClipboardService::new(clipboard_repo.clone(), config.share_demo_data),
            items: ItemService::new(clipboard_repo, item_repo, config.share_demo_data),
            cache: CacheAccessor::new(cache),
            cache_options: config.cache_options(),
            auth,
        }
    }
}

// ============================================================================
// Feature-specific AppState factories
// ============================================================================

#[cfg(all(feature = "sqlite", feature = "memory"))]
mod sqlite_memory {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage and in-memory cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            if config.seed_demo_data {
                repo.seed_demo_data().await?;
            }
            let cache = Arc::new(MemoryCache::new(config.cache_capacity));
            let auth = AuthState::from_config(&config.auth)?;

            tracing::info!(path = %config.sqlite_path, "Using SQLite storage with memory cache");
            Ok(Self::build(repo, cache, auth, config))
        }
    }
}

#[cfg(all(feature = "sqlite", feature = "redis"))]
mod sqlite_redis {
    use super::*;
    use crate::cache::RedisCache;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            if config.seed_demo_data {
                repo.seed_demo_data().await?;
            }
            let cache =
                Arc::new(RedisCache::new(&config.redis_url, config.cache_instance_name.clone()).await?);
            let auth = AuthState::from_config(&config.auth)?;

            tracing::info!(
                path = %config.sqlite_path,
                redis_url = %config.redis_url,
                "Using SQLite storage with Redis cache"
            );
            Ok(Self::build(repo, cache, auth, config))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "memory"))]
mod inmemory_memory {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage and cache.
        /// Useful for development without any external dependencies.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(InMemoryRepository::new());
            if config.seed_demo_data {
                repo.seed_demo_data().await?;
            }
            let cache = Arc::new(MemoryCache::new(config.cache_capacity));
            let auth = AuthState::from_config(&config.auth)?;

            tracing::info!("Using in-memory storage with memory cache");
            Ok(Self::build(repo, cache, auth, config))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "redis"))]
mod inmemory_redis {
    use super::*;
    use crate::cache::RedisCache;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(InMemoryRepository::new());
            if config.seed_demo_data {
                repo.seed_demo_data().await?;
            }
            let cache =
                Arc::new(RedisCache::new(&config.redis_url, config.cache_instance_name.clone()).await?);
            let auth = AuthState::from_config(&config.auth)?;

            tracing::info!(redis_url = %config.redis_url, "Using in-memory storage with Redis cache");
            Ok(Self::build(repo, cache, auth, config))
        }
    }
}

// ============================================================================
// Test support
// ============================================================================

#[cfg(test)]
mod test_support {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Builds a state over `repo` with a memory cache and auth disabled.
        pub(crate) fn for_repository(repo: InMemoryRepository, config: &Config) -> Self {
            Self::build(
                Arc::new(repo),
                Arc::new(MemoryCache::new(config.cache_capacity)),
                AuthState::disabled(),
                config,
            )
        }

        pub(crate) fn with_cache(mut self, cache: Arc<dyn Cache>) -> Self {
            self.cache = CacheAccessor::new(cache);
            self
        }

        pub(crate) fn with_auth(mut self, auth: AuthState) -> Self {
            self.auth = auth;
            self
        }
    }

    impl Default for AppState {
        /// Creates an AppState over empty in-memory storage for testing.
        fn default() -> Self {
            Self::for_repository(InMemoryRepository::new(), &Config::default())
        }
    }
}
