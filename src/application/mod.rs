//! Application layer services.
//!
//! Services orchestrate normalization, filtering and persistence and expose a
//! transport-independent API to the HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::collector_service::CollectorService`] - Ingestion, listing and clearing of the domain set
//! - [`services::stats_service::StatsService`] - Process-wide request and ingestion counters

pub mod services;
