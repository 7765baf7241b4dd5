//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O.

/// SQL statement to create all tables.
///
/// `foreign_keys` is a per-connection setting, so it is enabled here along
/// with the schema.
pub const CREATE_TABLES: &str = r#"
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS clipboards (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL CHECK (length(name) BETWEEN 1 AND 40),
    owner TEXT NOT NULL,
    UNIQUE (owner, name)
);

CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    clipboard_id INTEGER NOT NULL,
    name TEXT NOT NULL,
    is_complete INTEGER NOT NULL DEFAULT 0,
    UNIQUE (clipboard_id, name),
    FOREIGN KEY (clipboard_id) REFERENCES clipboards(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_clipboards_owner ON clipboards(owner);
CREATE INDEX IF NOT EXISTS idx_items_clipboard_id ON items(clipboard_id);
"#;

// Clipboard queries
pub const INSERT_CLIPBOARD: &str = r#"
INSERT INTO clipboards (name, owner)
VALUES (?1, ?2)
"#;

pub const INSERT_CLIPBOARD_WITH_ID: &str = r#"
INSERT INTO clipboards (id, name, owner)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_CLIPBOARD_BY_ID: &str = r#"
SELECT id, name, owner
FROM clipboards
WHERE id = ?1
"#;

pub const SELECT_CLIPBOARD_BY_OWNER_AND_NAME: &str = r#"
SELECT id, name, owner
FROM clipboards
WHERE owner = ?1 AND name = ?2
"#;

pub const COUNT_CLIPBOARDS: &str = r#"
SELECT COUNT(*) FROM clipboards
"#;

pub const UPDATE_CLIPBOARD_NAME: &str = r#"
UPDATE clipboards
SET name = ?2
WHERE id = ?1
"#;

pub const DELETE_CLIPBOARD: &str = r#"
DELETE FROM clipboards
WHERE id = ?1
"#;

// Item queries
pub const INSERT_ITEM: &str = r#"
INSERT INTO items (clipboard_id, name, is_complete)
VALUES (?1, ?2, 0)
"#;

pub const INSERT_ITEM_WITH_ID: &str = r#"
INSERT INTO items (id, clipboard_id, name, is_complete)
VALUES (?1, ?2, ?3, ?4)
"#;

pub const SELECT_ITEM_BY_ID: &str = r#"
SELECT id, clipboard_id, name, is_complete
FROM items
WHERE id = ?1
"#;

pub const SELECT_ITEMS_BY_CLIPBOARD: &str = r#"
SELECT id, clipboard_id, name, is_complete
FROM items
WHERE clipboard_id = ?1
ORDER BY id ASC
"#;

pub const SELECT_ITEM_BY_CLIPBOARD_AND_NAME: &str = r#"
SELECT id, clipboard_id, name, is_complete
FROM items
WHERE clipboard_id = ?1 AND name = ?2
"#;

pub const UPDATE_ITEM_NAME: &str = r#"
UPDATE items
SET name = ?2
WHERE id = ?1
"#;

pub const UPDATE_ITEM_COMPLETE: &str = r#"
UPDATE items
SET is_complete = ?2
WHERE id = ?1
"#;

pub const DELETE_ITEM: &str = r#"
DELETE FROM items
WHERE id = ?1
"#;

/// Builds the clipboard listing query for `owner_count` owners.
///
/// ```text
/// SELECT id, name, owner FROM clipboards WHERE owner IN (?1, ?2) ORDER BY id ASC
/// ```
pub fn select_clipboards_by_owners(owner_count: usize) -> String {
    let placeholders = (1..=owner_count)
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "SELECT id, name, owner FROM clipboards WHERE owner IN ({placeholders}) ORDER BY id ASC"
    )
}
