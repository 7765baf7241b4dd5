mod error;
mod mock_data;
mod operations;
mod types;

pub use error::{BoardError, BoardErrorKind, Result, ValidationError, CLIPBOARD_NAME_MAX_LEN};
pub use mock_data::{seed_clipboards, seed_items};
pub use operations::{validate_clipboard_name, validate_item_name};
pub use types::{Clipboard, ClipboardId, ClipboardSummary, Item, ItemId, Owner};
