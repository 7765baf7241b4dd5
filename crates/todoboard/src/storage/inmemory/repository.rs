//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use todoboard_core::board::{seed_clipboards, seed_items, Clipboard, ClipboardId, Item, ItemId, Owner};
use todoboard_core::storage::{ClipboardRepository, ItemRepository, RepositoryError, Result};

#[derive(Debug, Default)]
struct Tables {
    clipboards: BTreeMap<ClipboardId, Clipboard>,
    items: BTreeMap<ItemId, Item>,
    last_clipboard_id: ClipboardId,
    last_item_id: ItemId,
}

impl Tables {
    fn name_taken(&self, owner: &Owner, name: &str, except: Option<ClipboardId>) -> bool {
        self.clipboards
            .values()
            .any(|c| &c.owner == owner && c.name == name && Some(c.id) != except)
    }

    fn item_name_taken(&self, clipboard_id: ClipboardId, name: &str, except: Option<ItemId>) -> bool {
        self.items
            .values()
            .any(|i| i.clipboard_id == clipboard_id && i.name == name && Some(i.id) != except)
    }
}

fn clipboard_not_found(id: ClipboardId) -> RepositoryError {
    RepositoryError::NotFound {
        entity_type: "Clipboard",
        id: id.to_string(),
    }
}

fn item_not_found(id: ItemId) -> RepositoryError {
    RepositoryError::NotFound {
        entity_type: "Item",
        id: id.to_string(),
    }
}

/// In-memory storage backend.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the shared demo clipboards and items into an empty store.
    ///
    /// Does nothing if any clipboard already exists.
    pub async fn seed_demo_data(&self) -> Result<()> {
        let mut tables = self.tables.write().await;
        if !tables.clipboards.is_empty() {
            return Ok(());
        }

        for clipboard in seed_clipboards() {
            tables.last_clipboard_id = tables.last_clipboard_id.max(clipboard.id);
            tables.clipboards.insert(clipboard.id, clipboard);
        }
        for item in seed_items() {
            tables.last_item_id = tables.last_item_id.max(item.id);
            tables.items.insert(item.id, item);
        }

        tracing::info!(
            clipboards = tables.clipboards.len(),
            items = tables.items.len(),
            "Seeded demo data"
        );
        Ok(())
    }
}

#[async_trait]
impl ClipboardRepository for InMemoryRepository {
    async fn get_clipboard(&self, id: ClipboardId) -> Result<Option<Clipboard>> {
        let tables = self.tables.read().await;
        Ok(tables.clipboards.get(&id).cloned())
    }

    async fn list_clipboards(&self, owners: &[Owner]) -> Result<Vec<Clipboard>> {
        let tables = self.tables.read().await;
        Ok(tables
            .clipboards
            .values()
            .filter(|c| owners.contains(&c.owner))
            .cloned()
            .collect())
    }

    async fn find_clipboard_by_name(
        &self,
        owner: &Owner,
        name: &str,
    ) -> Result<Option<Clipboard>> {
        let tables = self.tables.read().await;
        Ok(tables
            .clipboards
            .values()
            .find(|c| &c.owner == owner && c.name == name)
            .cloned())
    }

    async fn create_clipboard(&self, owner: &Owner, name: &str) -> Result<Clipboard> {
        let mut tables = self.tables.write().await;
        if tables.name_taken(owner, name, None) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Clipboard",
                id: name.to_string(),
            });
        }

        tables.last_clipboard_id += 1;
        let clipboard = Clipboard::new(tables.last_clipboard_id, name, owner.clone());
        tables.clipboards.insert(clipboard.id, clipboard.clone());
        Ok(clipboard)
    }

    async fn rename_clipboard(&self, id: ClipboardId, name: &str) -> Result<Clipboard> {
        let mut tables = self.tables.write().await;
        let owner = match tables.clipboards.get(&id) {
            Some(clipboard) => clipboard.owner.clone(),
            None => return Err(clipboard_not_found(id)),
        };
        if tables.name_taken(&owner, name, Some(id)) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Clipboard",
                id: name.to_string(),
            });
        }

        let clipboard = tables
            .clipboards
            .get_mut(&id)
            .ok_or_else(|| clipboard_not_found(id))?;
        clipboard.name = name.to_string();
        Ok(clipboard.clone())
    }

    async fn delete_clipboard(&self, id: ClipboardId) -> Result<()> {
        let mut tables = self.tables.write().await;
        if tables.clipboards.remove(&id).is_none() {
            return Err(clipboard_not_found(id));
        }
        tables.items.retain(|_, item| item.clipboard_id != id);
        Ok(())
    }
}

#[async_trait]
impl ItemRepository for InMemoryRepository {
    async fn get_item(&self, id: ItemId) -> Result<Option<Item>> {
        let tables = self.tables.read().await;
        Ok(tables.items.get(&id).cloned())
    }

    async fn list_items(&self, clipboard_id: ClipboardId) -> Result<Vec<Item>> {
        let tables = self.tables.read().await;
        Ok(tables
            .items
            .values()
            .filter(|i| i.clipboard_id == clipboard_id)
            .cloned()
            .collect())
    }

    async fn find_item_by_name(
        &self,
        clipboard_id: ClipboardId,
        name: &str,
    ) -> Result<Option<Item>> {
        let tables = self.tables.read().await;
        Ok(tables
            .items
            .values()
            .find(|i| i.clipboard_id == clipboard_id && i.name == name)
            .cloned())
    }

    async fn create_item(&self, clipboard_id: ClipboardId, name: &str) -> Result<Item> {
        let mut tables = self.tables.write().await;
        if !tables.clipboards.contains_key(&clipboard_id) {
            return Err(clipboard_not_found(clipboard_id));
        }
        if tables.item_name_taken(clipboard_id, name, None) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Item",
                id: name.to_string(),
            });
        }

        tables.last_item_id += 1;
        let item = Item::new(tables.last_item_id, clipboard_id, name);
        tables.items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn rename_item(&self, id: ItemId, name: &str) -> Result<Item> {
        let mut tables = self.tables.write().await;
        let Some(clipboard_id) = tables.items.get(&id).map(|i| i.clipboard_id) else {
            return Err(item_not_found(id));
        };
        if tables.item_name_taken(clipboard_id, name, Some(id)) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Item",
                id: name.to_string(),
            });
        }

        let item = tables.items.get_mut(&id).ok_or_else(|| item_not_found(id))?;
        item.name = name.to_string();
        Ok(item.clone())
    }

    async fn set_item_complete(&self, id: ItemId, is_complete: bool) -> Result<Item> {
        let mut tables = self.tables.write().await;
        let item = tables.items.get_mut(&id).ok_or_else(|| item_not_found(id))?;
        item.is_complete = is_complete;
        Ok(item.clone())
    }

    async fn delete_item(&self, id: ItemId) -> Result<()> {
        let mut tables = self.tables.write().await;
        if tables.items.remove(&id).is_none() {
            return Err(item_not_found(id));
        }
        Ok(())
    }
}
