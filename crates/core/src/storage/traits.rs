use async_trait::async_trait;

use crate::board::{Clipboard, ClipboardId, Item, ItemId, Owner};

use super::Result;

/// Repository trait for clipboard operations.
#[async_trait]
pub trait ClipboardRepository: Send + Sync {
    /// Gets a clipboard by its ID.
    async fn get_clipboard(&self, id: ClipboardId) -> Result<Option<Clipboard>>;

    /// Lists clipboards owned by any of `owners`, ordered by ID.
    async fn list_clipboards(&self, owners: &[Owner]) -> Result<Vec<Clipboard>>;

    /// Finds the clipboard `owner` has named `name`, if any.
    async fn find_clipboard_by_name(&self, owner: &Owner, name: &str)
        -> Result<Option<Clipboard>>;

    /// Inserts a clipboard and returns it with its assigned ID.
    ///
    /// Fails with `AlreadyExists` if `owner` already has a clipboard named `name`.
    async fn create_clipboard(&self, owner: &Owner, name: &str) -> Result<Clipboard>;

    /// Renames a clipboard.
    ///
    /// Fails with `NotFound` if absent and `AlreadyExists` on a name clash.
    async fn rename_clipboard(&self, id: ClipboardId, name: &str) -> Result<Clipboard>;

    /// Deletes a clipboard together with all of its items.
    async fn delete_clipboard(&self, id: ClipboardId) -> Result<()>;
}

/// Repository trait for item operations.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Gets an item by its ID.
    async fn get_item(&self, id: ItemId) -> Result<Option<Item>>;

    /// Lists the items of a clipboard, ordered by ID.
    async fn list_items(&self, clipboard_id: ClipboardId) -> Result<Vec<Item>>;

    /// Finds an item in `clipboard_id` with exactly this name.
    async fn find_item_by_name(&self, clipboard_id: ClipboardId, name: &str)
        -> Result<Option<Item>>;

    /// Inserts an unfinished item and returns it with its assigned ID.
    ///
    /// Fails with `NotFound` if the clipboard is gone and `AlreadyExists` on a
    /// name clash within the clipboard.
    async fn create_item(&self, clipboard_id: ClipboardId, name: &str) -> Result<Item>;

    /// Renames an item, leaving its completion flag untouched.
    ///
    /// Fails with `NotFound` if absent and `AlreadyExists` on a name clash
    /// within the clipboard.
    async fn rename_item(&self, id: ItemId, name: &str) -> Result<Item>;

    /// Sets an item's completion flag, leaving its name untouched.
    async fn set_item_complete(&self, id: ItemId, is_complete: bool) -> Result<Item>;

    /// Deletes an item.
    async fn delete_item(&self, id: ItemId) -> Result<()>;
}
