//! Health check operations.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::TodoboardClient;
use crate::error::Result;

/// Liveness status.
#[derive(Debug, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
}

impl TodoboardClient {
    /// Check server liveness.
    pub async fn health(&self) -> Result<Health> {
        let response = self.request(Method::GET, "/healthz").send().await?;
        self.handle_response(response).await
    }
}
