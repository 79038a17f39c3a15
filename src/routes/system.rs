use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::clock::utc_now_iso;

/// Build the system sub-router.
pub fn routes() -> Router {
    Router::new()
        .route("/api/time", get(current_time))
        .route("/healthz", get(healthz))
}

/// GET /api/time — server-side UTC time, consumed by the UI's live clock.
async fn current_time() -> Json<Value> {
    Json(json!({ "iso": utc_now_iso() }))
}

/// GET /healthz — liveness endpoint for uptime checks.
async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok", "time": utc_now_iso() }))
}
