//! Item CLI commands.

use clap::{Parser, Subcommand};
use todoboard_core::board::{ClipboardId, ItemId};

/// Item management commands.
#[derive(Debug, Parser)]
pub struct ItemsCommand {
    #[command(subcommand)]
    pub action: ItemsAction,
}

/// Available item actions.
#[derive(Debug, Subcommand)]
pub enum ItemsAction {
    /// List the items of a clipboard.
    List {
        /// Clipboard ID.
        clipboard_id: ClipboardId,
    },
    /// Add an item to a clipboard.
    Add {
        /// Clipboard ID.
        clipboard_id: ClipboardId,
        /// Item name.
        name: String,
    },
    /// Rename an item.
    Rename {
        /// Item ID.
        id: ItemId,
        /// New name.
        name: String,
    },
    /// Delete an item.
    Delete {
        /// Item ID.
        id: ItemId,
    },
    /// Mark an item complete.
    Complete {
        /// Item ID.
        id: ItemId,
    },
    /// Mark an item unfinished.
    Unfinish {
        /// Item ID.
        id: ItemId,
    },
}
