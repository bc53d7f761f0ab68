//! Handlers for downloading the whole set.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::api::dto::export::ExportJson;
use crate::error::AppError;
use crate::state::AppState;

/// Downloads the set as plain text, one item per line.
///
/// # Endpoint
///
/// `GET /export`
///
/// The body mirrors the persisted file. An empty set yields an empty body.
pub async fn export_text_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    let page = state.collector.read_all(0, 0).await?;

    let mut body = page.domains.join("\n");
    if !body.is_empty() {
        body.push('\n');
    }

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"domains.txt\"",
            ),
        ],
        body,
    )
        .into_response())
}

/// Downloads the set as a pretty-printed JSON document.
///
/// # Endpoint
///
/// `GET /export/json`
pub async fn export_json_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    let page = state.collector.read_all(0, 0).await?;

    let body = serde_json::to_string_pretty(&ExportJson {
        domains: page.domains,
    })
    .map_err(|e| AppError::internal(e.to_string(), json!({})))?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/json; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"domains.json\"",
            ),
        ],
        body,
    )
        .into_response())
}
