//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.

use rusqlite::Row;
use thiserror::Error;

use todoboard_core::board::{Clipboard, Item, Owner};

#[derive(Debug, Error)]
#[error("Unknown owner key: {0}")]
struct UnknownOwner(String);

/// Convert a SQLite row to a Clipboard.
///
/// Expected columns: id, name, owner
pub fn row_to_clipboard(row: &Row) -> rusqlite::Result<Clipboard> {
    let id: i64 = row.get(0)?;
    let name: String = row.get(1)?;
    let owner: String = row.get(2)?;

    Ok(Clipboard {
        id,
        name,
        owner: parse_owner(2, owner)?,
    })
}

/// Convert a SQLite row to an Item.
///
/// Expected columns: id, clipboard_id, name, is_complete
pub fn row_to_item(row: &Row) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get(0)?,
        clipboard_id: row.get(1)?,
        name: row.get(2)?,
        is_complete: row.get(3)?,
    })
}

fn parse_owner(column: usize, key: String) -> rusqlite::Result<Owner> {
    Owner::from_key(&key).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            column,
            rusqlite::types::Type::Text,
            Box::new(UnknownOwner(key)),
        )
    })
}
