//! # Domain Collector
//!
//! A small HTTP service that accepts batches of domains and URLs, normalizes
//! and filters them, and keeps a deduplicated set in a flat text file.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Canonical items, blocklist and repository traits
//! - **Application Layer** ([`application`]) - Ingestion, clearing and statistics
//! - **Infrastructure Layer** ([`infrastructure`]) - Flat-file persistence
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run -- --port 9876 --output domains_collected.txt
//!
//! curl -X POST localhost:9876/domains \
//!     -H 'Content-Type: application/json' \
//!     -d '{"domains": ["https://www.Example-Site.com/Page/", "example-site.com"]}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables and flags via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CollectorService, StatsService, StatsSnapshot};
    pub use crate::domain::entities::{BatchOutcome, CanonicalItem, DomainPage};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::FileDomainSetRepository;
    pub use crate::routes::app_router;
    pub use crate::state::AppState;
}
