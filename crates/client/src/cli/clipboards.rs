//! Clipboard CLI commands.

use clap::{Parser, Subcommand};
use todoboard_core::board::ClipboardId;

/// Clipboard management commands.
#[derive(Debug, Parser)]
pub struct ClipboardsCommand {
    #[command(subcommand)]
    pub action: ClipboardsAction,
}

/// Available clipboard actions.
#[derive(Debug, Subcommand)]
pub enum ClipboardsAction {
    /// List your clipboards.
    List,
    /// Create a new clipboard.
    Create {
        /// Clipboard name (at most 40 characters).
        name: String,
    },
    /// Rename a clipboard.
    Rename {
        /// Clipboard ID.
        id: ClipboardId,
        /// New name.
        name: String,
    },
    /// Delete a clipboard and all of its items.
    Delete {
        /// Clipboard ID.
        id: ClipboardId,
    },
}
