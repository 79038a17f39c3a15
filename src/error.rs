use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Unified error type for calculator API responses.
///
/// All variants are validation/domain errors: they are fully recovered at the
/// dispatch boundary and surfaced as structured 400 responses, never as
/// unhandled faults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Malformed or missing payload fields.
    InvalidPayload(String),
    /// Operator symbol outside the supported set.
    UnsupportedOperator(String),
    /// Division with a zero divisor.
    DivisionByZero,
}

impl ApiError {
    /// User-facing message carried in the JSON error body.
    fn message(&self) -> String {
        match self {
            Self::InvalidPayload(msg) => format!("Invalid calculation payload: {msg}"),
            Self::UnsupportedOperator(symbol) => format!("Unsupported operator {symbol:?}"),
            Self::DivisionByZero => "Cannot divide by zero.".to_string(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPayload(msg) => write!(f, "invalid_payload: {msg}"),
            Self::UnsupportedOperator(symbol) => write!(f, "unsupported_operator: {symbol}"),
            Self::DivisionByZero => write!(f, "division_by_zero"),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({ "status": "error", "message": self.message() });
        (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
    }
}
