use axum::body::Bytes;
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::{json, Value};

use crate::calc::{CalculationRequest, CalculationResult};
use crate::error::ApiError;

/// Build the calculate sub-router.
pub fn routes() -> Router {
    Router::new().route("/api/calculate", post(calculate))
}

/// Success envelope: `{"status":"ok", left, right, operator, result, evaluated_at}`.
#[derive(Serialize)]
struct CalculateResponse {
    status: &'static str,
    #[serde(flatten)]
    outcome: CalculationResult,
}

/// POST /api/calculate — validate the JSON payload and run the operation.
///
/// The body is read raw so a missing or unparsable body degrades to the empty
/// payload instead of a framework-shaped rejection; validation then reports it
/// as an invalid payload like any other malformed input.
async fn calculate(body: Bytes) -> Result<Json<CalculateResponse>, ApiError> {
    let payload: Value = serde_json::from_slice(&body).unwrap_or_else(|_| json!({}));

    let request = CalculationRequest::from_payload(&payload).inspect_err(|e| {
        tracing::debug!("rejected calculation payload: {e}");
    })?;
    let outcome = request.evaluate()?;

    Ok(Json(CalculateResponse {
        status: "ok",
        outcome,
    }))
}
