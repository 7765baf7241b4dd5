//! Domain core for todoboard.
//!
//! Pure types and functions plus the storage and cache seams. Nothing in this
//! crate performs I/O on its own.

pub mod board;
pub mod cache;
pub mod storage;
