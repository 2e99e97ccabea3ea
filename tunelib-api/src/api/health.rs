//! Health endpoint

use axum::Json;
use serde_json::{json, Value};

/// GET /health
///
/// Liveness probe; answers without touching the database.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "module": "tunelib-api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
