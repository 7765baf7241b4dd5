//! In-memory storage backend.
//!
//! All tables live in one `Arc<RwLock<_>>`, so uniqueness checks and cascade
//! deletes happen under a single write lock. Data is lost on restart.

mod repository;

pub use repository::InMemoryRepository;
