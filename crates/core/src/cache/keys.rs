use crate::board::{ClipboardId, Owner};

/// Returns the cache key for the clipboards visible to `owner`.
pub fn clipboards_key(owner: &Owner) -> String {
    format!("clipboards:{}", owner.as_key())
}

/// Returns the cache key for the items of a clipboard.
pub fn items_key(clipboard_id: ClipboardId) -> String {
    format!("items:{}", clipboard_id)
}
