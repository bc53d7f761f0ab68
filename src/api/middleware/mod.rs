//! HTTP middleware applied to every route.
//!
//! Provides permissive CORS, request counting, and request tracing.

pub mod cors;
pub mod request_counter;
pub mod tracing;
