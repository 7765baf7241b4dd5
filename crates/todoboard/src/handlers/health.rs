//! Liveness endpoint.

use axum::Json;
use serde_json::{json, Value};

/// GET /healthz - Basic liveness probe.
///
/// Returns 200 immediately without touching storage or cache.
#[axum::debug_handler]
pub async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
