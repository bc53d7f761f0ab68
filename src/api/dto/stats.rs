//! DTOs for the statistics endpoint.

use serde::Serialize;

/// Response of `GET /stats`.
///
/// `total_domains` is counted from the persisted set at request time, unlike
/// the cached `unique_domains` counter reported by `/health`.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub status: String,
    pub total_domains: usize,
    pub total_received: u64,
    pub requests: u64,
    pub uptime: String,
    pub output_file: String,
}
