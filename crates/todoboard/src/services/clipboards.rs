use std::sync::Arc;

use todoboard_core::board::{
    validate_clipboard_name, BoardError, Clipboard, ClipboardId, Owner, Result, ValidationError,
};
use todoboard_core::storage::{ClipboardRepository, RepositoryError};

/// Clipboard operations for an authenticated owner.
#[derive(Clone)]
pub struct ClipboardService {
    repo: Arc<dyn ClipboardRepository>,
    share_demo_data: bool,
}

impl ClipboardService {
    /// `share_demo_data` makes shared clipboards visible to every owner.
    pub fn new(repo: Arc<dyn ClipboardRepository>, share_demo_data: bool) -> Self {
        Self {
            repo,
            share_demo_data,
        }
    }

    /// Lists the owner's clipboards, plus the shared ones when sharing is on.
    pub async fn list(&self, owner: &Owner) -> Result<Vec<Clipboard>> {
        let mut owners = vec![owner.clone()];
        if self.share_demo_data && !owner.is_shared() {
            owners.push(Owner::Shared);
        }
        Ok(self.repo.list_clipboards(&owners).await?)
    }

    pub async fn create(&self, owner: &Owner, name: &str) -> Result<Clipboard> {
        let name = validate_clipboard_name(name)?;
        if self.repo.find_clipboard_by_name(owner, &name).await?.is_some() {
            return Err(ValidationError::DuplicateClipboardName(name).into());
        }

        self.repo
            .create_clipboard(owner, &name)
            .await
            .map_err(|e| duplicate_name(e, &name))
    }

    /// Renames an owned clipboard. Keeping the current name is allowed.
    pub async fn rename(&self, owner: &Owner, id: ClipboardId, name: &str) -> Result<Clipboard> {
        let name = validate_clipboard_name(name)?;
        let clipboard = self.owned(owner, id).await?;

        if let Some(existing) = self.repo.find_clipboard_by_name(owner, &name).await? {
            if existing.id != clipboard.id {
                return Err(ValidationError::DuplicateClipboardName(name).into());
            }
        }

        self.repo
            .rename_clipboard(id, &name)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound { .. } => BoardError::ClipboardNotFoundOrForbidden(id),
                other => duplicate_name(other, &name),
            })
    }

    /// Deletes an owned clipboard and all of its items.
    ///
    /// Returns the clipboard as it was before deletion.
    pub async fn delete(&self, owner: &Owner, id: ClipboardId) -> Result<Clipboard> {
        let clipboard = self.owned(owner, id).await?;

        self.repo.delete_clipboard(id).await.map_err(|e| match e {
            RepositoryError::NotFound { .. } => BoardError::ClipboardNotFoundOrForbidden(id),
            other => BoardError::Storage(other),
        })?;

        Ok(clipboard)
    }

    async fn owned(&self, owner: &Owner, id: ClipboardId) -> Result<Clipboard> {
        self.repo
            .get_clipboard(id)
            .await?
            .filter(|c| c.is_owned_by(owner))
            .ok_or(BoardError::ClipboardNotFoundOrForbidden(id))
    }
}

fn duplicate_name(err: RepositoryError, name: &str) -> BoardError {
    match err {
        RepositoryError::AlreadyExists { .. } => {
            BoardError::Validation(ValidationError::DuplicateClipboardName(name.to_string()))
        }
        other => BoardError::Storage(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryRepository;

    fn service(share_demo_data: bool) -> (InMemoryRepository, ClipboardService) {
        let repo = InMemoryRepository::new();
        let service = ClipboardService::new(Arc::new(repo.clone()), share_demo_data);
        (repo, service)
    }

    fn u1() -> Owner {
        Owner::user("u1")
    }

    fn u2() -> Owner {
        Owner::user("u2")
    }

    #[tokio::test]
    async fn test_create_on_empty_store_assigns_first_id() {
        let (_, service) = service(true);

        let clipboard = service.create(&u1(), "Groceries").await.unwrap();

        assert_eq!(clipboard.id, 1);
        assert_eq!(clipboard.name, "Groceries");
    }

    #[tokio::test]
    async fn test_create_trims_name() {
        let (_, service) = service(true);
        let clipboard = service.create(&u1(), "  Chores  ").await.unwrap();
        assert_eq!(clipboard.name, "Chores");
    }

    #[tokio::test]
    async fn test_create_rejects_blank_names() {
        let (_, service) = service(true);

        for name in ["", "   ", "\t"] {
            assert_eq!(
                service.create(&u1(), name).await,
                Err(BoardError::Validation(ValidationError::EmptyName))
            );
        }
    }

    #[tokio::test]
    async fn test_create_rejects_long_names() {
        let (_, service) = service(true);
        let result = service.create(&u1(), &"x".repeat(41)).await;
        assert_eq!(
            result,
            Err(BoardError::Validation(ValidationError::NameTooLong { max: 40 }))
        );
    }

    #[tokio::test]
    async fn test_create_duplicate_for_same_owner_fails() {
        let (_, service) = service(true);
        service.create(&u1(), "A").await.unwrap();

        assert_eq!(
            service.create(&u1(), "A").await,
            Err(BoardError::Validation(ValidationError::DuplicateClipboardName(
                "A".to_string()
            )))
        );
        assert!(service.create(&u2(), "A").await.is_ok());
    }

    #[tokio::test]
    async fn test_list_includes_own_and_excludes_other_users() {
        let (repo, service) = service(true);
        repo.seed_demo_data().await.unwrap();
        let mine = service.create(&u1(), "Mine").await.unwrap();
        let theirs = service.create(&u2(), "Theirs").await.unwrap();

        let listed = service.list(&u1()).await.unwrap();

        assert!(listed.contains(&mine));
        assert!(!listed.contains(&theirs));
        assert_eq!(listed.iter().filter(|c| c.owner.is_shared()).count(), 3);
    }

    #[tokio::test]
    async fn test_list_without_sharing_hides_demo_data() {
        let (repo, service) = service(false);
        repo.seed_demo_data().await.unwrap();
        service.create(&u1(), "Mine").await.unwrap();

        let listed = service.list(&u1()).await.unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Mine");
    }

    #[tokio::test]
    async fn test_rename() {
        let (_, service) = service(true);
        let clipboard = service.create(&u1(), "Old").await.unwrap();
        service.create(&u1(), "Taken").await.unwrap();

        let renamed = service.rename(&u1(), clipboard.id, " New ").await.unwrap();
        assert_eq!(renamed.name, "New");

        assert!(service.rename(&u1(), clipboard.id, "New").await.is_ok());
        assert_eq!(
            service.rename(&u1(), clipboard.id, "Taken").await,
            Err(BoardError::Validation(ValidationError::DuplicateClipboardName(
                "Taken".to_string()
            )))
        );
        assert_eq!(
            service.rename(&u1(), clipboard.id, "").await,
            Err(BoardError::Validation(ValidationError::EmptyName))
        );
    }

    #[tokio::test]
    async fn test_rename_requires_ownership() {
        let (_, service) = service(true);
        let clipboard = service.create(&u1(), "Mine").await.unwrap();

        assert_eq!(
            service.rename(&u2(), clipboard.id, "Stolen").await,
            Err(BoardError::ClipboardNotFoundOrForbidden(clipboard.id))
        );
        assert_eq!(
            service.rename(&u1(), 99, "Ghost").await,
            Err(BoardError::ClipboardNotFoundOrForbidden(99))
        );
    }

    #[tokio::test]
    async fn test_shared_clipboards_are_read_only_for_users() {
        let (repo, service) = service(true);
        repo.seed_demo_data().await.unwrap();

        assert_eq!(
            service.delete(&u1(), 1).await,
            Err(BoardError::ClipboardNotFoundOrForbidden(1))
        );
        assert!(service.delete(&Owner::Shared, 1).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_returns_deleted_clipboard() {
        let (_, service) = service(true);
        let clipboard = service.create(&u1(), "Gone").await.unwrap();

        let deleted = service.delete(&u1(), clipboard.id).await.unwrap();

        assert_eq!(deleted, clipboard);
        assert!(service.list(&u1()).await.unwrap().is_empty());
        assert_eq!(
            service.delete(&u1(), clipboard.id).await,
            Err(BoardError::ClipboardNotFoundOrForbidden(clipboard.id))
        );
    }
}
