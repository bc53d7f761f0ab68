//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod clear;
pub mod domains;
pub mod export;
pub mod fallback;
pub mod health;
pub mod stats;

pub use clear::clear_handler;
pub use domains::{domain_list_handler, submit_domains_handler};
pub use export::{export_json_handler, export_text_handler};
pub use fallback::{AVAILABLE_ENDPOINTS, not_found_handler};
pub use health::health_handler;
pub use stats::stats_handler;
