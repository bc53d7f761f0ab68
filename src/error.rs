//! HTTP-facing error type.
//!
//! Every request-level or system-level failure is mapped into an [`AppError`],
//! which renders as a flat JSON object:
//!
//! ```json
//! { "error": "No domains provided" }
//! ```
//!
//! Extra `details` (when they form a JSON object) are merged into the top
//! level, e.g. `available_endpoints` on 404.
//!
//! Per-item normalization failures never reach this type; they only show up
//! in aggregate counts.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value, json};

use crate::domain::repositories::StoreError;

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    PayloadTooLarge { message: String, details: Value },
    NotFound { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn payload_too_large(message: impl Into<String>, details: Value) -> Self {
        Self::PayloadTooLarge {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Validation { message, .. }
            | AppError::PayloadTooLarge { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::Internal { message, .. } => message,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message(), self.status())
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::PayloadTooLarge { message, details }
            | AppError::NotFound { message, details }
            | AppError::Internal { message, details } => (message, details),
        };

        let mut body = Map::new();
        body.insert("error".to_string(), Value::String(message));
        if let Value::Object(extra) = details {
            for (key, value) in extra {
                body.entry(key).or_insert(value);
            }
        }

        (status, Json(Value::Object(body))).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        tracing::error!(error = %e, "Domain store failure");
        AppError::internal(e.to_string(), json!({}))
    }
}
