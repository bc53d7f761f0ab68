//! Handler for the statistics endpoint.

use axum::{Json, extract::State};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::uptime::format_uptime;

/// Returns counters plus the size and location of the persisted set.
///
/// # Endpoint
///
/// `GET /stats`
///
/// # Errors
///
/// Returns 500 if the persisted set cannot be read.
pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let total_domains = state.collector.count().await?;
    let snapshot = state.stats.snapshot();

    let output_file = state.collector.output_file();
    let output_file = std::path::absolute(&output_file).unwrap_or(output_file);

    Ok(Json(StatsResponse {
        status: "ok".to_string(),
        total_domains,
        total_received: snapshot.total_received,
        requests: snapshot.requests,
        uptime: format_uptime(snapshot.uptime),
        output_file: output_file.display().to_string(),
    }))
}
