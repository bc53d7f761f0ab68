//! Handler for liveness endpoints.

use axum::{Json, extract::State};

use crate::api::dto::health::{HealthResponse, HealthStats};
use crate::state::AppState;
use crate::utils::uptime::format_uptime;

/// Reports that the collector is running, with its running counters.
///
/// # Endpoint
///
/// `GET /ping`, `GET /health`
///
/// Always answers 200; the counters are a possibly stale snapshot.
///
/// # Response
///
/// ```json
/// {
///   "status": "ok",
///   "message": "Domain collector is running",
///   "version": "0.1.0",
///   "uptime": "0:12:03",
///   "started_at": "2026-10-16T09:30:00Z",
///   "stats": { "total_received": 120, "unique_domains": 87, "requests": 14 }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let snapshot = state.stats.snapshot();

    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Domain collector is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: format_uptime(snapshot.uptime),
        started_at: snapshot.started_at,
        stats: HealthStats {
            total_received: snapshot.total_received,
            unique_domains: snapshot.unique_domains,
            requests: snapshot.requests,
        },
    })
}
