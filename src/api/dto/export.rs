//! DTOs for export endpoints.

use serde::Serialize;

/// Body of `GET /export/json`.
#[derive(Debug, Serialize)]
pub struct ExportJson {
    pub domains: Vec<String>,
}
