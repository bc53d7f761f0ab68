//! Domain layer containing the collector's core types and rules.
//!
//! Nothing here knows about HTTP or the file system.
//!
//! # Architecture
//!
//! - [`entities`] - Canonical items, batch outcomes and pages
//! - [`blocklist`] - Static suppression list with dot-boundary suffix matching
//! - [`repositories`] - Persistence contract for the domain set
//!
//! # Ingestion Flow
//!
//! 1. Raw item is normalized by [`crate::utils::normalizer`]
//! 2. Its host is checked against [`blocklist::Blocklist`]
//! 3. Survivors are merged into the set through [`repositories::DomainSetRepository`]
//!    inside the single-writer section of [`crate::application::services::CollectorService`]

pub mod blocklist;
pub mod entities;
pub mod repositories;
