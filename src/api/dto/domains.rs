//! DTOs for domain listing, submission and clearing.

use serde::Serialize;
use serde_json::{Value, json};

use crate::error::AppError;

/// Response of `GET /domains`.
#[derive(Debug, Serialize)]
pub struct DomainListResponse {
    pub status: String,
    pub count: usize,
    pub total: usize,
    pub offset: usize,
    pub domains: Vec<String>,
}

/// Response of `POST /domains`.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub status: String,
    pub received: usize,
    pub new_domains: usize,
    pub total_domains: usize,
    pub message: String,
}

/// Response of `POST /clear`.
#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub status: String,
    pub message: String,
}

/// Extracts the raw items from a `POST /domains` body.
///
/// Expected shape: `{"domains": [ ... ]}`. Items themselves are not inspected
/// here; non-string items are dropped later during normalization.
///
/// # Errors
///
/// Returns [`AppError::Validation`] when:
/// - the body is empty
/// - the body is not valid JSON, or not a JSON object
/// - `domains` is missing, null, or otherwise empty
/// - `domains` is not a list
pub fn parse_submission(body: &[u8]) -> Result<Vec<Value>, AppError> {
    if body.is_empty() {
        return Err(AppError::bad_request("Empty request body", json!({})));
    }

    let payload: Value = serde_json::from_slice(body)
        .map_err(|e| AppError::bad_request(format!("Invalid JSON: {e}"), json!({})))?;

    let Value::Object(mut fields) = payload else {
        return Err(AppError::bad_request(
            "Request body must be a JSON object",
            json!({}),
        ));
    };

    let domains = fields.remove("domains").unwrap_or(Value::Null);
    if is_empty_value(&domains) {
        return Err(AppError::bad_request("No domains provided", json!({})));
    }

    match domains {
        Value::Array(items) => Ok(items),
        _ => Err(AppError::bad_request("Domains must be a list", json!({}))),
    }
}

/// Absent-like values: null, false, zero, and empty strings, lists or objects.
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
