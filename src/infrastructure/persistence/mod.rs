//! File-system repository implementations.
//!
//! # Repositories
//!
//! - [`FileDomainSetRepository`] - Sorted, newline-delimited domain set

pub mod file_domain_set_repository;

pub use file_domain_set_repository::FileDomainSetRepository;
