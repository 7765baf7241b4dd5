//! todoboard_client - CLI client for the todoboard API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::TodoboardClient;
pub use error::{ClientError, Result};
