//! Catch-all for unknown routes.

use serde_json::json;

use crate::error::AppError;

/// Endpoints advertised in 404 responses.
pub const AVAILABLE_ENDPOINTS: &[&str] = &[
    "GET /ping",
    "GET /health",
    "GET /domains",
    "GET /stats",
    "GET /export",
    "GET /export/json",
    "POST /domains",
    "POST /clear",
];

/// Answers any unmatched path or method with 404 and the endpoint list.
pub async fn not_found_handler() -> AppError {
    AppError::not_found(
        "Not found",
        json!({ "available_endpoints": AVAILABLE_ENDPOINTS }),
    )
}
