//! Business logic services for the application layer.

pub mod collector_service;
pub mod stats_service;

pub use collector_service::CollectorService;
pub use stats_service::{StatsService, StatsSnapshot};
