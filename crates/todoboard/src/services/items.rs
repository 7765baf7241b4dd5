use std::sync::Arc;

use todoboard_core::board::{
    validate_item_name, BoardError, Clipboard, ClipboardId, Item, ItemId, Owner, Result,
    ValidationError,
};
use todoboard_core::storage::{ClipboardRepository, ItemRepository, RepositoryError};

/// Item operations for an authenticated owner.
///
/// Reads are allowed on owned clipboards and, when sharing is on, on shared
/// ones. Every write requires ownership of the parent clipboard.
#[derive(Clone)]
pub struct ItemService {
    clipboards: Arc<dyn ClipboardRepository>,
    items: Arc<dyn ItemRepository>,
    share_demo_data: bool,
}

impl ItemService {
    pub fn new(
        clipboards: Arc<dyn ClipboardRepository>,
        items: Arc<dyn ItemRepository>,
        share_demo_data: bool,
    ) -> Self {
        Self {
            clipboards,
            items,
            share_demo_data,
        }
    }

    /// Checks that `owner` may read the items of `clipboard_id`.
    ///
    /// Fails with `ClipboardNotFound` or `Forbidden`.
    pub async fn ensure_readable(&self, clipboard_id: ClipboardId, owner: &Owner) -> Result<Clipboard> {
        let clipboard = self
            .clipboards
            .get_clipboard(clipboard_id)
            .await?
            .ok_or(BoardError::ClipboardNotFound(clipboard_id))?;

        if !clipboard.is_visible_to(owner, self.share_demo_data) {
            return Err(BoardError::Forbidden(clipboard_id));
        }
        Ok(clipboard)
    }

    pub async fn list(&self, clipboard_id: ClipboardId, owner: &Owner) -> Result<Vec<Item>> {
        self.ensure_readable(clipboard_id, owner).await?;
        Ok(self.items.list_items(clipboard_id).await?)
    }

    /// Adds an unfinished item to an owned clipboard.
    pub async fn add(&self, clipboard_id: ClipboardId, owner: &Owner, name: &str) -> Result<Item> {
        let name = validate_item_name(name)?;

        let owned = self
            .clipboards
            .get_clipboard(clipboard_id)
            .await?
            .is_some_and(|c| c.is_owned_by(owner));
        if !owned {
            return Err(ValidationError::ClipboardNotOwned(clipboard_id).into());
        }
        if self.items.find_item_by_name(clipboard_id, &name).await?.is_some() {
            return Err(ValidationError::DuplicateItemName(name).into());
        }

        self.items
            .create_item(clipboard_id, &name)
            .await
            .map_err(|e| match e {
                RepositoryError::AlreadyExists { .. } => {
                    BoardError::Validation(ValidationError::DuplicateItemName(name))
                }
                RepositoryError::NotFound { .. } => {
                    BoardError::Validation(ValidationError::ClipboardNotOwned(clipboard_id))
                }
                other => BoardError::Storage(other),
            })
    }

    /// Deletes an item and returns it, so the caller knows its clipboard.
    pub async fn delete(&self, item_id: ItemId, owner: &Owner) -> Result<Item> {
        let item = self.owned(item_id, owner).await?;

        self.items.delete_item(item_id).await.map_err(|e| match e {
            RepositoryError::NotFound { .. } => BoardError::ItemNotFoundOrForbidden(item_id),
            other => BoardError::Storage(other),
        })?;

        Ok(item)
    }

    pub async fn complete(&self, item_id: ItemId, owner: &Owner) -> Result<Item> {
        self.set_complete(item_id, owner, true).await
    }

    pub async fn unfinish(&self, item_id: ItemId, owner: &Owner) -> Result<Item> {
        self.set_complete(item_id, owner, false).await
    }

    /// Renames an item. Names stay unique within the clipboard.
    pub async fn rename(&self, item_id: ItemId, owner: &Owner, name: &str) -> Result<Item> {
        let name = validate_item_name(name)?;
        let item = self.owned(item_id, owner).await?;

        if let Some(existing) = self.items.find_item_by_name(item.clipboard_id, &name).await? {
            if existing.id != item.id {
                return Err(ValidationError::DuplicateItemName(name).into());
            }
        }

        self.items
            .rename_item(item_id, &name)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound { .. } => BoardError::ItemNotFoundOrForbidden(item_id),
                RepositoryError::AlreadyExists { .. } => {
                    BoardError::Validation(ValidationError::DuplicateItemName(name))
                }
                other => BoardError::Storage(other),
            })
    }

    async fn set_complete(&self, item_id: ItemId, owner: &Owner, is_complete: bool) -> Result<Item> {
        self.owned(item_id, owner).await?;

        self.items
            .set_item_complete(item_id, is_complete)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound { .. } => BoardError::ItemNotFoundOrForbidden(item_id),
                other => BoardError::Storage(other),
            })
    }

    /// Loads an item whose parent clipboard belongs to `owner`.
    async fn owned(&self, item_id: ItemId, owner: &Owner) -> Result<Item> {
        let not_found = BoardError::ItemNotFoundOrForbidden(item_id);

        let Some(item) = self.items.get_item(item_id).await? else {
            return Err(not_found);
        };
        let owned = self
            .clipboards
            .get_clipboard(item.clipboard_id)
            .await?
            .is_some_and(|c| c.is_owned_by(owner));

        if owned {
            Ok(item)
        } else {
            Err(not_found)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ClipboardService;
    use crate::storage::InMemoryRepository;
    use async_trait::async_trait;
    use todoboard_core::storage::Result as StorageResult;
    use tokio::sync::Notify;

    struct Fixture {
        repo: InMemoryRepository,
        clipboards: ClipboardService,
        items: ItemService,
    }

    fn fixture() -> Fixture {
        let repo = InMemoryRepository::new();
        let shared = Arc::new(repo.clone());
        Fixture {
            clipboards: ClipboardService::new(shared.clone(), true),
            items: ItemService::new(shared.clone(), shared, true),
            repo,
        }
    }

    fn u1() -> Owner {
        Owner::user("u1")
    }

    fn u2() -> Owner {
        Owner::user("u2")
    }

    #[tokio::test]
    async fn test_groceries_scenario() {
        let f = fixture();

        let clipboard = f.clipboards.create(&u1(), "Groceries").await.unwrap();
        assert_eq!(clipboard.id, 1);

        let milk = f.items.add(1, &u1(), "Milk").await.unwrap();
        assert_eq!(milk, Item::new(1, 1, "Milk"));

        let done = f.items.complete(1, &u1()).await.unwrap();
        assert!(done.is_complete);

        let listed = f.items.list(1, &u1()).await.unwrap();
        assert_eq!(listed, vec![Item::new(1, 1, "Milk").with_complete(true)]);
    }

    #[tokio::test]
    async fn test_complete_then_unfinish_round_trips() {
        let f = fixture();
        f.clipboards.create(&u1(), "A").await.unwrap();
        let item = f.items.add(1, &u1(), "x").await.unwrap();

        f.items.complete(item.id, &u1()).await.unwrap();
        let back = f.items.unfinish(item.id, &u1()).await.unwrap();

        assert_eq!(back.is_complete, item.is_complete);
        assert_eq!(f.items.list(1, &u1()).await.unwrap(), vec![item]);
    }

    #[tokio::test]
    async fn test_complete_is_idempotent() {
        let f = fixture();
        f.clipboards.create(&u1(), "A").await.unwrap();
        let item = f.items.add(1, &u1(), "x").await.unwrap();

        f.items.complete(item.id, &u1()).await.unwrap();
        let again = f.items.complete(item.id, &u1()).await.unwrap();

        assert!(again.is_complete);
    }

    #[tokio::test]
    async fn test_list_missing_clipboard_is_not_found() {
        let f = fixture();
        assert_eq!(
            f.items.list(7, &u1()).await,
            Err(BoardError::ClipboardNotFound(7))
        );
    }

    #[tokio::test]
    async fn test_list_other_users_clipboard_is_forbidden() {
        let f = fixture();
        f.clipboards.create(&u1(), "Private").await.unwrap();

        assert_eq!(f.items.list(1, &u2()).await, Err(BoardError::Forbidden(1)));
    }

    #[tokio::test]
    async fn test_list_shared_clipboard_is_readable() {
        let f = fixture();
        f.repo.seed_demo_data().await.unwrap();

        let items = f.items.list(3, &u2()).await.unwrap();

        assert_eq!(items.len(), 11);
        assert!(items.iter().all(|i| i.clipboard_id == 3));
    }

    #[tokio::test]
    async fn test_delete_clipboard_cascades_to_items() {
        let f = fixture();
        f.clipboards.create(&u1(), "A").await.unwrap();
        let item = f.items.add(1, &u1(), "x").await.unwrap();

        f.clipboards.delete(&u1(), 1).await.unwrap();

        assert_eq!(
            f.items.list(1, &u1()).await,
            Err(BoardError::ClipboardNotFound(1))
        );
        assert_eq!(
            f.items.complete(item.id, &u1()).await,
            Err(BoardError::ItemNotFoundOrForbidden(item.id))
        );
    }

    #[tokio::test]
    async fn test_add_rejects_duplicates_and_blank_names() {
        let f = fixture();
        f.clipboards.create(&u1(), "A").await.unwrap();
        f.items.add(1, &u1(), "Milk").await.unwrap();

        assert_eq!(
            f.items.add(1, &u1(), " Milk ").await,
            Err(BoardError::Validation(ValidationError::DuplicateItemName(
                "Milk".to_string()
            )))
        );
        assert_eq!(
            f.items.add(1, &u1(), "  ").await,
            Err(BoardError::Validation(ValidationError::EmptyName))
        );
    }

    #[tokio::test]
    async fn test_add_requires_owned_clipboard() {
        let f = fixture();
        f.repo.seed_demo_data().await.unwrap();
        let theirs = f.clipboards.create(&u2(), "Theirs").await.unwrap();

        for clipboard_id in [1, theirs.id, 999] {
            assert_eq!(
                f.items.add(clipboard_id, &u1(), "Sneaky").await,
                Err(BoardError::Validation(ValidationError::ClipboardNotOwned(
                    clipboard_id
                )))
            );
        }
    }

    #[tokio::test]
    async fn test_mutations_require_ownership() {
        let f = fixture();
        f.clipboards.create(&u1(), "A").await.unwrap();
        let item = f.items.add(1, &u1(), "x").await.unwrap();
        let forbidden = Err(BoardError::ItemNotFoundOrForbidden(item.id));

        assert_eq!(f.items.delete(item.id, &u2()).await, forbidden);
        assert_eq!(f.items.complete(item.id, &u2()).await, forbidden);
        assert_eq!(f.items.unfinish(item.id, &u2()).await, forbidden);
        assert_eq!(f.items.rename(item.id, &u2(), "y").await, forbidden);
    }

    #[tokio::test]
    async fn test_missing_item_is_not_found_or_forbidden() {
        let f = fixture();
        assert_eq!(
            f.items.delete(42, &u1()).await,
            Err(BoardError::ItemNotFoundOrForbidden(42))
        );
    }

    #[tokio::test]
    async fn test_delete_returns_item_with_clipboard() {
        let f = fixture();
        f.clipboards.create(&u1(), "A").await.unwrap();
        f.clipboards.create(&u1(), "B").await.unwrap();
        let item = f.items.add(2, &u1(), "x").await.unwrap();

        let deleted = f.items.delete(item.id, &u1()).await.unwrap();

        assert_eq!(deleted.clipboard_id, 2);
        assert!(f.items.list(2, &u1()).await.unwrap().is_empty());
    }

    /// Item store that parks the first name lookup until released.
    #[derive(Clone)]
    struct ParkedLookup {
        inner: InMemoryRepository,
        reached: Arc<Notify>,
        release: Arc<Notify>,
    }

    #[async_trait]
    impl ItemRepository for ParkedLookup {
        async fn get_item(&self, id: ItemId) -> StorageResult<Option<Item>> {
            self.inner.get_item(id).await
        }

        async fn list_items(&self, clipboard_id: ClipboardId) -> StorageResult<Vec<Item>> {
            self.inner.list_items(clipboard_id).await
        }

        async fn find_item_by_name(
            &self,
            clipboard_id: ClipboardId,
            name: &str,
        ) -> StorageResult<Option<Item>> {
            self.reached.notify_one();
            self.release.notified().await;
            self.inner.find_item_by_name(clipboard_id, name).await
        }

        async fn create_item(&self, clipboard_id: ClipboardId, name: &str) -> StorageResult<Item> {
            self.inner.create_item(clipboard_id, name).await
        }

        async fn rename_item(&self, id: ItemId, name: &str) -> StorageResult<Item> {
            self.inner.rename_item(id, name).await
        }

        async fn set_item_complete(&self, id: ItemId, is_complete: bool) -> StorageResult<Item> {
            self.inner.set_item_complete(id, is_complete).await
        }

        async fn delete_item(&self, id: ItemId) -> StorageResult<()> {
            self.inner.delete_item(id).await
        }
    }

    #[tokio::test]
    async fn test_concurrent_rename_keeps_completion() {
        let f = fixture();
        f.clipboards.create(&u1(), "A").await.unwrap();
        let milk = f.items.add(1, &u1(), "Milk").await.unwrap();

        let parked = ParkedLookup {
            inner: f.repo.clone(),
            reached: Arc::new(Notify::new()),
            release: Arc::new(Notify::new()),
        };
        let renaming = ItemService::new(Arc::new(f.repo.clone()), Arc::new(parked.clone()), true);
        let id = milk.id;
        let rename = tokio::spawn(async move { renaming.rename(id, &u1(), "Oat milk").await });

        // The rename has loaded the item and is between its read and its write
        parked.reached.notified().await;
        let done = f.items.complete(milk.id, &u1()).await.unwrap();
        assert!(done.is_complete);
        parked.release.notify_one();

        let renamed = rename.await.unwrap().unwrap();
        assert_eq!(renamed, Item::new(milk.id, 1, "Oat milk").with_complete(true));
        assert_eq!(f.items.list(1, &u1()).await.unwrap(), vec![renamed]);
    }

    #[tokio::test]
    async fn test_rename_keeps_completion_flag() {
        let f = fixture();
        f.clipboards.create(&u1(), "A").await.unwrap();
        let milk = f.items.add(1, &u1(), "Milk").await.unwrap();
        f.items.complete(milk.id, &u1()).await.unwrap();

        let renamed = f.items.rename(milk.id, &u1(), "Oat milk").await.unwrap();

        assert!(renamed.is_complete);
    }

    #[tokio::test]
    async fn test_rename_enforces_uniqueness_within_clipboard() {
        let f = fixture();
        f.clipboards.create(&u1(), "A").await.unwrap();
        let milk = f.items.add(1, &u1(), "Milk").await.unwrap();
        let eggs = f.items.add(1, &u1(), "Eggs").await.unwrap();

        assert_eq!(
            f.items.rename(eggs.id, &u1(), "Milk").await,
            Err(BoardError::Validation(ValidationError::DuplicateItemName(
                "Milk".to_string()
            )))
        );

        let renamed = f.items.rename(milk.id, &u1(), " Oat milk ").await.unwrap();
        assert_eq!(renamed.name, "Oat milk");
        assert!(f.items.rename(milk.id, &u1(), "Oat milk").await.is_ok());
    }
}
