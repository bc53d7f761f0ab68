//! Handlers for listing and submitting domains.

use axum::{
    Json,
    body::Bytes,
    extract::{
        Query, State,
        rejection::{BytesRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde_json::json;

use crate::api::dto::domains::{DomainListResponse, SubmitResponse, parse_submission};
use crate::api::dto::pagination::ListParams;
use crate::error::AppError;
use crate::state::AppState;

/// How many new items are echoed to the log per batch.
const LOGGED_ITEMS: usize = 10;

/// Lists the stored set, sorted, with optional paging.
///
/// # Endpoint
///
/// `GET /domains?offset=0&limit=0`
///
/// `limit=0` (the default) returns everything from `offset` on.
///
/// # Errors
///
/// Returns 400 for non-numeric or negative paging values.
/// Returns 500 if the persisted set cannot be read.
pub async fn domain_list_handler(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<DomainListResponse>, AppError> {
    let Query(params) =
        params.map_err(|e| AppError::bad_request(e.body_text(), json!({})))?;
    let (offset, limit) = params.offset_limit();

    let page = state.collector.read_all(offset, limit).await?;

    Ok(Json(DomainListResponse {
        status: "ok".to_string(),
        count: page.domains.len(),
        total: page.total,
        offset,
        domains: page.domains,
    }))
}

/// Ingests a batch of domains or URLs.
///
/// # Endpoint
///
/// `POST /domains`
///
/// # Request Body
///
/// ```json
/// { "domains": ["https://www.Example-Site.com/Page/", "example-site.com", "not a domain"] }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "status": "ok",
///   "received": 3,
///   "new_domains": 1,
///   "total_domains": 1,
///   "message": "Added 1 new domains"
/// }
/// ```
///
/// Invalid and blocked items are dropped silently; they only lower
/// `new_domains`.
///
/// # Errors
///
/// Returns 400 for an empty or malformed body, or a missing or non-list `domains`.
/// Returns 413 if the body exceeds the configured limit.
/// Returns 500 if the persisted set cannot be read or written.
pub async fn submit_domains_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SubmitResponse>, AppError> {
    let body = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::payload_too_large(
                "Request too large",
                json!({ "max_bytes": state.max_body_bytes }),
            )
        } else {
            AppError::bad_request(rejection.body_text(), json!({}))
        }
    })?;

    let items = parse_submission(&body)?;
    let outcome = state.collector.add_batch(&items).await?;

    log_new_items(&outcome.added);

    let new_domains = outcome.added_count();
    Ok(Json(SubmitResponse {
        status: "ok".to_string(),
        received: outcome.received,
        new_domains,
        total_domains: outcome.total,
        message: format!("Added {new_domains} new domains"),
    }))
}

fn log_new_items(added: &[String]) {
    if added.is_empty() {
        tracing::info!("No new unique domains (all duplicates or rejected)");
        return;
    }

    tracing::info!(count = added.len(), "New domains added");
    for item in added.iter().take(LOGGED_ITEMS) {
        tracing::info!("  + {item}");
    }
    if added.len() > LOGGED_ITEMS {
        tracing::info!("  ... and {} more", added.len() - LOGGED_ITEMS);
    }
}
