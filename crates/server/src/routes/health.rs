use axum::{Extension, Json};
use serde_json::Value as JsonValue;

use crate::db::Db;

/// GET /health
pub async fn health_check(Extension(db): Extension<Db>) -> Json<JsonValue> {
    Json(serde_json::json!({
        "status": "ok",
        "storage": db.backend_name(),
    }))
}
