use serde::Serialize;
use serde_json::Value;

use crate::clock::utc_now_iso;
use crate::error::ApiError;

/// The closed set of supported arithmetic operations.
///
/// The operator table is fixed at compile time; `from_symbol` is the only way
/// in, so evaluation can never see a symbol outside this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    /// Resolve an operator symbol. ASCII and Unicode spellings of the same
    /// operation are equivalent (`*` / `×`, `/` / `÷`).
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" | "×" => Some(Self::Mul),
            "/" | "÷" => Some(Self::Div),
            _ => None,
        }
    }

    /// Apply the operation. Division by zero is reported as a domain error
    /// rather than producing an IEEE infinity or NaN.
    fn apply(self, left: f64, right: f64) -> Result<f64, ApiError> {
        match self {
            Self::Add => Ok(left + right),
            Self::Sub => Ok(left - right),
            Self::Mul => Ok(left * right),
            Self::Div => {
                if right == 0.0 {
                    Err(ApiError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
        }
    }
}

/// A validated calculation, built from an untrusted JSON payload.
///
/// The operator is resolved to an [`Op`] at construction time, so an
/// unrecognized symbol is rejected before any arithmetic runs.
#[derive(Debug, Clone)]
pub struct CalculationRequest {
    pub left: f64,
    pub right: f64,
    /// Operator symbol exactly as the client sent it, echoed back in responses.
    pub symbol: String,
    op: Op,
}

impl CalculationRequest {
    /// Parse an arbitrary payload into a validated request.
    ///
    /// `left` / `right` accept JSON numbers and numeric strings (the API has
    /// always been lenient here, and clients send keypad buffers as strings);
    /// both must be finite. `operator` must resolve to a known symbol.
    pub fn from_payload(payload: &Value) -> Result<Self, ApiError> {
        let left = number_field(payload, "left")?;
        let right = number_field(payload, "right")?;
        let symbol = operator_field(payload)?;

        let op = Op::from_symbol(&symbol)
            .ok_or_else(|| ApiError::UnsupportedOperator(symbol.clone()))?;

        Ok(Self {
            left,
            right,
            symbol,
            op,
        })
    }

    /// Run the calculation, stamping the result with the evaluation time.
    pub fn evaluate(&self) -> Result<CalculationResult, ApiError> {
        let result = self.op.apply(self.left, self.right)?;
        Ok(CalculationResult {
            left: self.left,
            right: self.right,
            operator: self.symbol.clone(),
            result,
            evaluated_at: utc_now_iso(),
        })
    }
}

/// Outcome of a successful calculation.
#[derive(Debug, Clone, Serialize)]
pub struct CalculationResult {
    pub left: f64,
    pub right: f64,
    pub operator: String,
    pub result: f64,
    /// UTC wall clock at evaluation time, ISO-8601 with trailing `Z`.
    pub evaluated_at: String,
}

/// Coerce a payload field to a finite f64. Numbers pass through; strings are
/// trimmed and parsed. Anything else (absent, null, bool, array, object,
/// non-numeric or non-finite string) is an invalid payload.
fn number_field(payload: &Value, key: &str) -> Result<f64, ApiError> {
    let value = payload
        .get(key)
        .ok_or_else(|| ApiError::InvalidPayload(format!("missing field {key:?}")))?;

    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(ApiError::InvalidPayload(format!(
            "field {key:?} is not a finite number"
        ))),
    }
}

/// Extract the operator symbol. A JSON string is taken verbatim; any other
/// present value is rendered to its JSON text (so `5` looks up as `"5"`) and
/// will fall out as an unsupported operator.
fn operator_field(payload: &Value) -> Result<String, ApiError> {
    match payload.get("operator") {
        None => Err(ApiError::InvalidPayload(
            "missing field \"operator\"".to_string(),
        )),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Ok(other.to_string()),
    }
}
