//! Handler for wiping the domain set.

use axum::{Json, extract::State};

use crate::api::dto::domains::ClearResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Deletes the persisted set and resets the unique counter.
///
/// # Endpoint
///
/// `POST /clear`
///
/// Idempotent: clearing an empty collector succeeds as well.
///
/// # Errors
///
/// Returns 500 if an existing file cannot be removed.
pub async fn clear_handler(State(state): State<AppState>) -> Result<Json<ClearResponse>, AppError> {
    state.collector.clear().await?;

    tracing::warn!(output = %state.collector.output_file().display(), "All domains cleared");

    Ok(Json(ClearResponse {
        status: "ok".to_string(),
        message: "All domains cleared".to_string(),
    }))
}
