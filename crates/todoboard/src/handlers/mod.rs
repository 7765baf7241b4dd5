//! HTTP handlers.
//!
//! List reads authorize first, then consult the cache, then storage.
//! Mutations hit storage first and invalidate the affected cache key only
//! after they succeed.

pub mod clipboards;
pub mod error;
pub mod health;
pub mod items;

pub use error::AppError;
