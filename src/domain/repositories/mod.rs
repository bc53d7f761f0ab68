//! Repository trait definitions for the domain layer.
//!
//! The persisted domain set is reached only through [`DomainSetRepository`].
//! Implementations live in `crate::infrastructure::persistence`; mock
//! implementations are generated via `mockall` for unit tests.

pub mod domain_set_repository;

pub use domain_set_repository::{DomainSetRepository, StoreError};

#[cfg(test)]
pub use domain_set_repository::MockDomainSetRepository;
