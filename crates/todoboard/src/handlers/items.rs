use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use todoboard_auth::CurrentOwner;
use todoboard_core::board::{ClipboardId, Item, ItemId};
use todoboard_core::cache::items_key;

use crate::{
    handlers::{clipboards::NameQuery, AppError},
    state::AppState,
};

/// `?clipboardId=&name=` query for adding an item.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemQuery {
    pub clipboard_id: ClipboardId,
    pub name: String,
}

/// List the items of a clipboard (GET /api/items/{clipboardId}).
///
/// Authorization runs before the cache is consulted.
pub async fn list_items(
    State(state): State<AppState>,
    CurrentOwner(owner): CurrentOwner,
    Path(clipboard_id): Path<ClipboardId>,
) -> Result<Json<Vec<Item>>, AppError> {
    state.items.ensure_readable(clipboard_id, &owner).await?;

    let key = items_key(clipboard_id);
    if let Some(cached) = state.cache.get::<Vec<Item>>(&key).await {
        return Ok(Json(cached));
    }

    let items = state.items.list(clipboard_id, &owner).await?;
    state.cache.set(&key, &items, &state.cache_options).await;
    Ok(Json(items))
}

/// Add an item (POST /api/item?clipboardId=&name=).
pub async fn add_item(
    State(state): State<AppState>,
    CurrentOwner(owner): CurrentOwner,
    Query(query): Query<AddItemQuery>,
) -> Result<Json<Item>, AppError> {
    let item = state
        .items
        .add(query.clipboard_id, &owner, &query.name)
        .await?;
    state.cache.remove(&items_key(item.clipboard_id)).await;

    tracing::info!(item_id = item.id, clipboard_id = item.clipboard_id, "Added item");
    Ok(Json(item))
}

/// Rename an item (PATCH /api/item/{id}?name=).
pub async fn rename_item(
    State(state): State<AppState>,
    CurrentOwner(owner): CurrentOwner,
    Path(id): Path<ItemId>,
    Query(query): Query<NameQuery>,
) -> Result<Json<Item>, AppError> {
    let item = state.items.rename(id, &owner, &query.name).await?;
    state.cache.remove(&items_key(item.clipboard_id)).await;

    tracing::info!(item_id = id, clipboard_id = item.clipboard_id, "Renamed item");
    Ok(Json(item))
}

/// Delete an item (DELETE /api/item/{id}).
pub async fn delete_item(
    State(state): State<AppState>,
    CurrentOwner(owner): CurrentOwner,
    Path(id): Path<ItemId>,
) -> Result<Json<Item>, AppError> {
    let item = state.items.delete(id, &owner).await?;
    state.cache.remove(&items_key(item.clipboard_id)).await;

    tracing::info!(item_id = id, "Deleted item");
    Ok(Json(item))
}

/// Mark an item complete (POST /api/item/{id}/complete).
pub async fn complete_item(
    State(state): State<AppState>,
    CurrentOwner(owner): CurrentOwner,
    Path(id): Path<ItemId>,
) -> Result<Json<Item>, AppError> {
    let item = state.items.complete(id, &owner).await?;
    state.cache.remove(&items_key(item.clipboard_id)).await;

    tracing::info!(item_id = id, clipboard_id = item.clipboard_id, "Completed item");
    Ok(Json(item))
}

/// Mark an item unfinished (POST /api/item/{id}/unfinish).
pub async fn unfinish_item(
    State(state): State<AppState>,
    CurrentOwner(owner): CurrentOwner,
    Path(id): Path<ItemId>,
) -> Result<Json<Item>, AppError> {
    let item = state.items.unfinish(id, &owner).await?;
    state.cache.remove(&items_key(item.clipboard_id)).await;

    tracing::info!(item_id = id, clipboard_id = item.clipboard_id, "Unfinished item");
    Ok(Json(item))
}
