//! Bearer token authentication for todoboard.
//!
//! This crate provides:
//! - JWT validation with an HS256 secret or an RS256 public key
//! - An Axum extractor that resolves the request's [`Owner`](todoboard_core::board::Owner)
//!
//! With authentication disabled every request acts as the shared owner.

mod config;
mod error;
mod extractors;
mod jwt;
mod state;

pub use config::AuthConfig;
pub use error::AuthError;
pub use extractors::CurrentOwner;
pub use jwt::{Claims, JwtValidator};
pub use state::AuthState;
