//! Core data structures of the collector.

pub mod batch;
pub mod canonical;

pub use batch::{BatchOutcome, DomainPage};
pub use canonical::CanonicalItem;
