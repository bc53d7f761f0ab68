//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization.

pub mod domains;
pub mod export;
pub mod health;
pub mod pagination;
pub mod stats;
