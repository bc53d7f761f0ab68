//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{CollectorService, StatsService};
use crate::infrastructure::persistence::FileDomainSetRepository;

/// Concrete collector type used by the HTTP layer.
pub type Collector = CollectorService<FileDomainSetRepository>;

#[derive(Clone)]
pub struct AppState {
    pub collector: Arc<Collector>,
    pub stats: Arc<StatsService>,
    /// Largest accepted ingestion body, in bytes.
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(collector: Arc<Collector>, stats: Arc<StatsService>, max_body_bytes: usize) -> Self {
        Self {
            collector,
            stats,
            max_body_bytes,
        }
    }
}
