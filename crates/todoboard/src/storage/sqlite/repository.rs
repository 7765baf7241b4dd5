//! SQLite repository implementation.

use async_trait::async_trait;
use rusqlite::OptionalExtension;
use tokio_rusqlite::Connection;

use todoboard_core::board::{seed_clipboards, seed_items, Clipboard, ClipboardId, Item, ItemId, Owner};
use todoboard_core::storage::{ClipboardRepository, ItemRepository, RepositoryError, Result};

use super::conversions::{row_to_clipboard, row_to_item};
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

fn no_rows() -> tokio_rusqlite::Error {
    wrap_err(rusqlite::Error::QueryReturnedNoRows)
}

/// SQLite-based repository implementation.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Opens (or creates) a file-based database and applies the schema.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a repository over an in-memory database.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    /// Loads the shared demo clipboards and items into an empty database.
    ///
    /// Does nothing if any clipboard already exists.
    pub async fn seed_demo_data(&self) -> Result<()> {
        let clipboards = seed_clipboards();
        let items = seed_items();

        let seeded = self
            .conn
            .call(move |conn| {
                let count: i64 = conn
                    .query_row(schema::COUNT_CLIPBOARDS, [], |row| row.get(0))
                    .map_err(wrap_err)?;
                if count > 0 {
                    return Ok(false);
                }

                let tx = conn.transaction().map_err(wrap_err)?;
                for clipboard in &clipboards {
                    tx.execute(
                        schema::INSERT_CLIPBOARD_WITH_ID,
                        rusqlite::params![clipboard.id, clipboard.name, clipboard.owner.as_key()],
                    )
                    .map_err(wrap_err)?;
                }
                for item in &items {
                    tx.execute(
                        schema::INSERT_ITEM_WITH_ID,
                        rusqlite::params![item.id, item.clipboard_id, item.name, item.is_complete],
                    )
                    .map_err(wrap_err)?;
                }
                tx.commit().map_err(wrap_err)?;
                Ok(true)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Clipboard"))?;

        if seeded {
            tracing::info!("Seeded demo data");
        }
        Ok(())
    }
}

// ============================================================================
// ClipboardRepository implementation
// ============================================================================

#[async_trait]
impl ClipboardRepository for SqliteRepository {
    async fn get_clipboard(&self, id: ClipboardId) -> Result<Option<Clipboard>> {
        self.conn
            .call(move |conn| {
                conn.query_row(schema::SELECT_CLIPBOARD_BY_ID, [id], row_to_clipboard)
                    .optional()
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Clipboard", id.to_string()))
    }

    async fn list_clipboards(&self, owners: &[Owner]) -> Result<Vec<Clipboard>> {
        if owners.is_empty() {
            return Ok(Vec::new());
        }
        let sql = schema::select_clipboards_by_owners(owners.len());
        let keys: Vec<String> = owners.iter().map(Owner::as_key).collect();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(&sql).map_err(wrap_err)?;
                let rows = stmt
                    .query_map(rusqlite::params_from_iter(keys.iter()), row_to_clipboard)
                    .map_err(wrap_err)?;

                let mut clipboards = Vec::new();
                for row_result in rows {
                    clipboards.push(row_result.map_err(wrap_err)?);
                }
                Ok(clipboards)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Clipboard"))
    }

    async fn find_clipboard_by_name(
        &self,
        owner: &Owner,
        name: &str,
    ) -> Result<Option<Clipboard>> {
        let owner_key = owner.as_key();
        let name = name.to_string();

        self.conn
            .call(move |conn| {
                conn.query_row(
                    schema::SELECT_CLIPBOARD_BY_OWNER_AND_NAME,
                    [&owner_key, &name],
                    row_to_clipboard,
                )
                .optional()
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Clipboard"))
    }

    async fn create_clipboard(&self, owner: &Owner, name: &str) -> Result<Clipboard> {
        let owner = owner.clone();
        let name = name.to_string();
        let conflict = name.clone();

        self.conn
            .call(move |conn| {
                conn.execute(schema::INSERT_CLIPBOARD, [&name, &owner.as_key()])
                    .map_err(wrap_err)?;
                Ok(Clipboard::new(conn.last_insert_rowid(), name, owner))
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Clipboard", conflict))
    }

    async fn rename_clipboard(&self, id: ClipboardId, name: &str) -> Result<Clipboard> {
        let name = name.to_string();
        let label = name.clone();

        self.conn
            .call(move |conn| {
                let existing = conn
                    .query_row(schema::SELECT_CLIPBOARD_BY_ID, [id], row_to_clipboard)
                    .optional()
                    .map_err(wrap_err)?;
                let Some(mut clipboard) = existing else {
                    return Err(no_rows());
                };

                conn.execute(schema::UPDATE_CLIPBOARD_NAME, rusqlite::params![id, name])
                    .map_err(wrap_err)?;
                clipboard.name = name;
                Ok(clipboard)
            })
            .await
            .map_err(|e| match map_tokio_rusqlite_error_with_id(e, "Clipboard", label) {
                RepositoryError::NotFound { entity_type, .. } => RepositoryError::NotFound {
                    entity_type,
                    id: id.to_string(),
                },
                other => other,
            })
    }

    async fn delete_clipboard(&self, id: ClipboardId) -> Result<()> {
        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_CLIPBOARD, [id])
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(no_rows())
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Clipboard", id.to_string()))
    }
}

// ============================================================================
// ItemRepository implementation
// ============================================================================

#[async_trait]
impl ItemRepository for SqliteRepository {
    async fn get_item(&self, id: ItemId) -> Result<Option<Item>> {
        self.conn
            .call(move |conn| {
                conn.query_row(schema::SELECT_ITEM_BY_ID, [id], row_to_item)
                    .optional()
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Item", id.to_string()))
    }

    async fn list_items(&self, clipboard_id: ClipboardId) -> Result<Vec<Item>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_ITEMS_BY_CLIPBOARD)
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map([clipboard_id], row_to_item)
                    .map_err(wrap_err)?;

                let mut items = Vec::new();
                for row_result in rows {
                    items.push(row_result.map_err(wrap_err)?);
                }
                Ok(items)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Item"))
    }

    async fn find_item_by_name(
        &self,
        clipboard_id: ClipboardId,
        name: &str,
    ) -> Result<Option<Item>> {
        let name = name.to_string();

        self.conn
            .call(move |conn| {
                conn.query_row(
                    schema::SELECT_ITEM_BY_CLIPBOARD_AND_NAME,
                    rusqlite::params![clipboard_id, name],
                    row_to_item,
                )
                .optional()
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Item"))
    }

    async fn create_item(&self, clipboard_id: ClipboardId, name: &str) -> Result<Item> {
        let name = name.to_string();
        let conflict = name.clone();

        let created = self
            .conn
            .call(move |conn| {
                let parent = conn
                    .query_row(schema::SELECT_CLIPBOARD_BY_ID, [clipboard_id], row_to_clipboard)
                    .optional()
                    .map_err(wrap_err)?;
                if parent.is_none() {
                    return Ok(None);
                }

                conn.execute(schema::INSERT_ITEM, rusqlite::params![clipboard_id, name])
                    .map_err(wrap_err)?;
                Ok(Some(Item::new(conn.last_insert_rowid(), clipboard_id, name)))
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Item", conflict))?;

        created.ok_or_else(|| RepositoryError::NotFound {
            entity_type: "Clipboard",
            id: clipboard_id.to_string(),
        })
    }

    async fn rename_item(&self, id: ItemId, name: &str) -> Result<Item> {
        let name = name.to_string();
        let label = name.clone();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::UPDATE_ITEM_NAME, rusqlite::params![id, name])
                    .map_err(wrap_err)?;
                if rows == 0 {
                    return Err(no_rows());
                }
                conn.query_row(schema::SELECT_ITEM_BY_ID, [id], row_to_item)
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| match map_tokio_rusqlite_error_with_id(e, "Item", label) {
                RepositoryError::NotFound { entity_type, .. } => RepositoryError::NotFound {
                    entity_type,
                    id: id.to_string(),
                },
                other => other,
            })
    }

    async fn set_item_complete(&self, id: ItemId, is_complete: bool) -> Result<Item> {
        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::UPDATE_ITEM_COMPLETE, rusqlite::params![id, is_complete])
                    .map_err(wrap_err)?;
                if rows == 0 {
                    return Err(no_rows());
                }
                conn.query_row(schema::SELECT_ITEM_BY_ID, [id], row_to_item)
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Item", id.to_string()))
    }

    async fn delete_item(&self, id: ItemId) -> Result<()> {
        self.conn
            .call(move |conn| {
                let rows = conn.execute(schema::DELETE_ITEM, [id]).map_err(wrap_err)?;
                if rows == 0 {
                    Err(no_rows())
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Item", id.to_string()))
    }
}
