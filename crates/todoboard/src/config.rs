use std::{env, str::FromStr, time::Duration};

use todoboard_auth::AuthConfig;
use todoboard_core::cache::CacheEntryOptions;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer token settings (`RUN_WITH_AUTH`, `AUTH_*`)
    pub auth: AuthConfig,
    /// Show shared clipboards to every owner (default: true)
    pub share_demo_data: bool,
    /// Seed shared demo data into empty storage at startup (default: true)
    pub seed_demo_data: bool,
    /// Allowed CORS origins. Empty allows any origin.
    pub cors_allowed_origins: Vec<String>,
    /// Request timeout in seconds (default: 30)
    pub request_timeout_secs: u64,
    /// Sliding expiration for cached lists, in seconds (default: 10)
    pub cache_sliding_secs: u64,
    /// Absolute expiration for cached lists, in seconds (default: 3600)
    pub cache_absolute_secs: u64,
    /// Maximum number of memory cache entries (default: 10,000)
    pub cache_capacity: usize,
    /// Redis connection URL (default: "redis://127.0.0.1:6379")
    /// Note: Only used when the `redis` feature is enabled.
    #[allow(dead_code)]
    pub redis_url: String,
    /// Key prefix for Redis entries (default: "todoboard:")
    #[allow(dead_code)]
    pub cache_instance_name: String,
    /// Path to SQLite database file (default: "todoboard.db")
    #[allow(dead_code)]
    pub sqlite_path: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `RUN_WITH_AUTH`, `AUTH_JWT_SECRET`, `AUTH_JWT_PUBLIC_KEY`, `AUTH_ISSUER`, `AUTH_AUDIENCE`
    /// - `SHARE_DEMO_DATA` - Expose shared clipboards (default: true)
    /// - `SEED_DEMO_DATA` - Seed storage at startup (default: true)
    /// - `CORS_ALLOWED_ORIGINS` - Comma-separated origins (default: any)
    /// - `REQUEST_TIMEOUT_SECS` - Request timeout (default: 30)
    /// - `CACHE_SLIDING_SECS` / `CACHE_ABSOLUTE_SECS` - Expiration (default: 10 / 3600)
    /// - `CACHE_CAPACITY` - Memory cache entries (default: 10,000)
    /// - `REDIS_URL` - Redis connection URL (default: "redis://127.0.0.1:6379")
    /// - `CACHE_INSTANCE_NAME` - Redis key prefix (default: "todoboard:")
    /// - `SQLITE_PATH` - SQLite database path (default: "todoboard.db")
    pub fn from_env() -> Self {
        Self {
            auth: AuthConfig::from_env(),
            ..Self::from_lookup(|name| env::var(name).ok())
        }
    }

    /// Builds a config from an arbitrary variable lookup. Auth is left disabled.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let flag = |name: &str, default: bool| lookup(name).map_or(default, |v| parse_flag(&v));

        Self {
            auth: defaults.auth,
            share_demo_data: flag("SHARE_DEMO_DATA", defaults.share_demo_data),
            seed_demo_data: flag("SEED_DEMO_DATA", defaults.seed_demo_data),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default(),
            request_timeout_secs: parse_var(&lookup, "REQUEST_TIMEOUT_SECS")
                .unwrap_or(defaults.request_timeout_secs),
            cache_sliding_secs: parse_var(&lookup, "CACHE_SLIDING_SECS").unwrap_or(defaults.cache_sliding_secs),
            cache_absolute_secs: parse_var(&lookup, "CACHE_ABSOLUTE_SECS")
                .unwrap_or(defaults.cache_absolute_secs),
            cache_capacity: parse_var(&lookup, "CACHE_CAPACITY").unwrap_or(defaults.cache_capacity),
            redis_url: lookup("REDIS_URL").unwrap_or(defaults.redis_url),
            cache_instance_name: lookup("CACHE_INSTANCE_NAME")
                .unwrap_or(defaults.cache_instance_name),
            sqlite_path: lookup("SQLITE_PATH").unwrap_or(defaults.sqlite_path),
        }
    }

    /// Expiration policy applied to cached list reads.
    pub fn cache_options(&self) -> CacheEntryOptions {
        CacheEntryOptions::default()
            .with_sliding(Duration::from_secs(self.cache_sliding_secs))
            .with_absolute(Duration::from_secs(self.cache_absolute_secs))
    }

    /// Get request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auth: AuthConfig::default(),
            share_demo_data: true,
            seed_demo_data: true,
            cors_allowed_origins: Vec::new(),
            request_timeout_secs: 30,
            cache_sliding_secs: 10,
            cache_absolute_secs: 3600,
            cache_capacity: 10_000,
            redis_url: "redis://127.0.0.1:6379".to_string(),
            cache_instance_name: "todoboard:".to_string(),
            sqlite_path: "todoboard.db".to_string(),
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<T> {
    lookup(name).and_then(|v| v.trim().parse().ok())
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}
