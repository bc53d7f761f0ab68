//! API route configuration.

use crate::api::handlers::{
    clear_handler, domain_list_handler, export_json_handler, export_text_handler, health_handler,
    stats_handler, submit_domains_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All collector endpoints.
///
/// # Endpoints
///
/// - `GET  /ping`         - Health check
/// - `GET  /health`       - Health check
/// - `GET  /domains`      - List stored items (`offset`, `limit`)
/// - `POST /domains`      - Submit a batch of domains or URLs
/// - `GET  /stats`        - Collector statistics
/// - `GET  /export`       - Download as text
/// - `GET  /export/json`  - Download as JSON
/// - `POST /clear`        - Remove every stored item
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/ping", get(health_handler))
        .route("/health", get(health_handler))
        .route(
            "/domains",
            get(domain_list_handler).post(submit_domains_handler),
        )
        .route("/stats", get(stats_handler))
        .route("/export", get(export_text_handler))
        .route("/export/json", get(export_json_handler))
        .route("/clear", post(clear_handler))
}
