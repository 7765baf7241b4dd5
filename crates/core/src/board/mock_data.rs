//! Demo seed data.
//!
//! Three shared clipboards and fifty items, matching the fixture the web
//! frontends were built against. Odd-numbered items start out complete.

use super::types::{Clipboard, ClipboardId, Item, Owner};

/// Clipboard assignment for items 1 through 50.
const ITEM_CLIPBOARDS: [ClipboardId; 50] = [
    1, 1, 2, 2, 3, 1, 1, 2, 2, 3, //
    3, 1, 1, 2, 2, 3, 3, 1, 1, 2, //
    2, 3, 3, 1, 1, 2, 2, 3, 3, 1, //
    1, 2, 2, 3, 3, 1, 1, 1, 1, 1, //
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
];

/// Returns the shared demo clipboards.
pub fn seed_clipboards() -> Vec<Clipboard> {
    (1..=3)
        .map(|id| Clipboard::new(id, format!("Clipboard {id}"), Owner::Shared))
        .collect()
}

/// Returns the demo items for [`seed_clipboards`].
pub fn seed_items() -> Vec<Item> {
    ITEM_CLIPBOARDS
        .iter()
        .zip(1..)
        .map(|(&clipboard_id, id)| {
            Item::new(id, clipboard_id, format!("Item {id}")).with_complete(id % 2 == 1)
        })
        .collect()
}
