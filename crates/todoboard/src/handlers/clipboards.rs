use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use todoboard_auth::CurrentOwner;
use todoboard_core::board::{ClipboardId, ClipboardSummary};
use todoboard_core::cache::{clipboards_key, items_key};

use crate::{handlers::AppError, state::AppState};

/// `?name=` query for create and rename.
#[derive(Debug, Deserialize)]
pub struct NameQuery {
    pub name: String,
}

/// List the caller's clipboards (GET /api/clipboards).
///
/// Includes shared clipboards when sharing is enabled.
pub async fn list_clipboards(
    State(state): State<AppState>,
    CurrentOwner(owner): CurrentOwner,
) -> Result<Json<Vec<ClipboardSummary>>, AppError> {
    let key = clipboards_key(&owner);
    if let Some(cached) = state.cache.get::<Vec<ClipboardSummary>>(&key).await {
        return Ok(Json(cached));
    }

    let summaries: Vec<ClipboardSummary> = state
        .clipboards
        .list(&owner)
        .await?
        .into_iter()
        .map(ClipboardSummary::from)
        .collect();

    state.cache.set(&key, &summaries, &state.cache_options).await;
    Ok(Json(summaries))
}

/// Create a clipboard (POST /api/clipboard?name=).
pub async fn create_clipboard(
    State(state): State<AppState>,
    CurrentOwner(owner): CurrentOwner,
    Query(query): Query<NameQuery>,
) -> Result<Json<ClipboardSummary>, AppError> {
    let clipboard = state.clipboards.create(&owner, &query.name).await?;
    state.cache.remove(&clipboards_key(&owner)).await;

    tracing::info!(clipboard_id = clipboard.id, %owner, "Created clipboard");
    Ok(Json(clipboard.into()))
}

/// Rename a clipboard (PATCH /api/clipboard/{id}?name=).
pub async fn rename_clipboard(
    State(state): State<AppState>,
    CurrentOwner(owner): CurrentOwner,
    Path(id): Path<ClipboardId>,
    Query(query): Query<NameQuery>,
) -> Result<Json<ClipboardSummary>, AppError> {
    let clipboard = state.clipboards.rename(&owner, id, &query.name).await?;
    state.cache.remove(&clipboards_key(&owner)).await;

    tracing::info!(clipboard_id = id, name = %clipboard.name, "Renamed clipboard");
    Ok(Json(clipboard.into()))
}

/// Delete a clipboard and its items (DELETE /api/clipboard/{id}).
pub async fn delete_clipboard(
    State(state): State<AppState>,
    CurrentOwner(owner): CurrentOwner,
    Path(id): Path<ClipboardId>,
) -> Result<Json<ClipboardSummary>, AppError> {
    let clipboard = state.clipboards.delete(&owner, id).await?;
    state.cache.remove(&clipboards_key(&owner)).await;
    state.cache.remove(&items_key(id)).await;

    tracing::info!(clipboard_id = id, %owner, "Deleted clipboard and its items");
    Ok(Json(clipboard.into()))
}
