//! Helper functions used across the application.
//!
//! - [`normalizer`] - Raw item validation and canonicalization
//! - [`uptime`] - Human-readable durations for status responses

pub mod normalizer;
pub mod uptime;
