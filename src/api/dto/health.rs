//! DTOs for the liveness endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Response of `GET /ping` and `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub version: String,
    pub uptime: String,
    pub started_at: DateTime<Utc>,
    pub stats: HealthStats,
}

/// Running counters embedded in the health response.
#[derive(Debug, Serialize)]
pub struct HealthStats {
    pub total_received: u64,
    pub unique_domains: u64,
    pub requests: u64,
}
