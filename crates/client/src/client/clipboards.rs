//! Clipboard API operations.

use reqwest::Method;
use todoboard_core::board::{ClipboardId, ClipboardSummary};

use super::TodoboardClient;
use crate::error::Result;

impl TodoboardClient {
    /// List the caller's clipboards.
    pub async fn list_clipboards(&self) -> Result<Vec<ClipboardSummary>> {
        let response = self.request(Method::GET, "/api/clipboards").send().await?;
        self.handle_response(response).await
    }

    /// Create a new clipboard.
    pub async fn create_clipboard(&self, name: &str) -> Result<ClipboardSummary> {
        let response = self
            .request(Method::POST, "/api/clipboard")
            .query(&[("name", name)])
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Rename a clipboard.
    pub async fn rename_clipboard(&self, id: ClipboardId, name: &str) -> Result<ClipboardSummary> {
        let response = self
            .request(Method::PATCH, &format!("/api/clipboard/{}", id))
            .query(&[("name", name)])
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete a clipboard and all of its items.
    pub async fn delete_clipboard(&self, id: ClipboardId) -> Result<ClipboardSummary> {
        let response = self
            .request(Method::DELETE, &format!("/api/clipboard/{}", id))
            .send()
            .await?;
        self.handle_response(response).await
    }
}
