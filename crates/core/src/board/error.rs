use thiserror::Error;

use crate::storage::RepositoryError;

use super::types::{ClipboardId, ItemId};

/// Maximum clipboard name length, in characters.
pub const CLIPBOARD_NAME_MAX_LEN: usize = 40;

/// Rejected input for a clipboard or item operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Name too long (max {max} characters)")]
    NameTooLong { max: usize },
    #[error("A clipboard named '{0}' already exists")]
    DuplicateClipboardName(String),
    #[error("An item named '{0}' already exists in this clipboard")]
    DuplicateItemName(String),
    #[error("Clipboard {0} does not exist or is not owned by the caller")]
    ClipboardNotOwned(ClipboardId),
}

/// Errors returned by the clipboard and item services.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Clipboard not found: {0}")]
    ClipboardNotFound(ClipboardId),
    #[error("Clipboard {0} is not accessible to the caller")]
    Forbidden(ClipboardId),
    #[error("Clipboard {0} not found or not owned by the caller")]
    ClipboardNotFoundOrForbidden(ClipboardId),
    #[error("Item {0} not found or not owned by the caller")]
    ItemNotFoundOrForbidden(ItemId),
    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

/// Coarse classification of a [`BoardError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardErrorKind {
    Validation,
    NotFound,
    Forbidden,
    NotFoundOrForbidden,
    Storage,
}

impl BoardError {
    pub fn kind(&self) -> BoardErrorKind {
        match self {
            BoardError::Validation(_) => BoardErrorKind::Validation,
            BoardError::ClipboardNotFound(_) => BoardErrorKind::NotFound,
            BoardError::Forbidden(_) => BoardErrorKind::Forbidden,
            BoardError::ClipboardNotFoundOrForbidden(_) | BoardError::ItemNotFoundOrForbidden(_) => {
                BoardErrorKind::NotFoundOrForbidden
            }
            BoardError::Storage(_) => BoardErrorKind::Storage,
        }
    }
}

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, BoardError>;
