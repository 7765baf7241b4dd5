//! SQLite storage backend implementation.
//!
//! Uses `rusqlite` for synchronous operations and `tokio-rusqlite` to run them
//! on a dedicated thread. Every repository call is a single closure on that
//! thread, so a check followed by a write inside one call cannot interleave
//! with another request.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
