//! Item API operations.

use reqwest::Method;
use todoboard_core::board::{ClipboardId, Item, ItemId};

use super::TodoboardClient;
use crate::error::Result;

impl TodoboardClient {
    /// List the items of a clipboard.
    pub async fn list_items(&self, clipboard_id: ClipboardId) -> Result<Vec<Item>> {
        let response = self
            .request(Method::GET, &format!("/api/items/{}", clipboard_id))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Add an item to a clipboard.
    pub async fn add_item(&self, clipboard_id: ClipboardId, name: &str) -> Result<Item> {
        let clipboard_id = clipboard_id.to_string();
        let response = self
            .request(Method::POST, "/api/item")
            .query(&[("clipboardId", clipboard_id.as_str()), ("name", name)])
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Rename an item.
    pub async fn rename_item(&self, id: ItemId, name: &str) -> Result<Item> {
        let response = self
            .request(Method::PATCH, &format!("/api/item/{}", id))
            .query(&[("name", name)])
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete an item.
    pub async fn delete_item(&self, id: ItemId) -> Result<Item> {
        let response = self
            .request(Method::DELETE, &format!("/api/item/{}", id))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Mark an item complete.
    pub async fn complete_item(&self, id: ItemId) -> Result<Item> {
        let response = self
            .request(Method::POST, &format!("/api/item/{}/complete", id))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Mark an item unfinished.
    pub async fn unfinish_item(&self, id: ItemId) -> Result<Item> {
        let response = self
            .request(Method::POST, &format!("/api/item/{}/unfinish", id))
            .send()
            .await?;
        self.handle_response(response).await
    }
}
