//! Top-level router configuration.
//!
//! # Middleware (outermost first)
//!
//! - **Tracing** - Structured request/response logging
//! - **Request counter** - Feeds the `requests` statistic
//! - **CORS** - Permissive headers on every response, `OPTIONS` short-circuit
//! - **Body limit** - Caps ingestion bodies at `max_body_bytes`

use crate::api;
use crate::api::handlers::not_found_handler;
use crate::api::middleware::{cors, request_counter, tracing};
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::{Router, middleware};
use tower::ServiceBuilder;

/// Constructs the application router with all routes and middleware.
///
/// Unknown paths and unsupported methods on known paths both answer
/// `404` with the list of available endpoints.
pub fn app_router(state: AppState) -> Router {
    api::routes::routes()
        .fallback(not_found_handler)
        .method_not_allowed_fallback(not_found_handler)
        .layer(DefaultBodyLimit::max(state.max_body_bytes))
        .with_state(state.clone())
        .layer(
            ServiceBuilder::new()
                .layer(tracing::layer())
                .layer(middleware::from_fn_with_state(
                    state,
                    request_counter::layer,
                ))
                .layer(middleware::from_fn(cors::layer)),
        )
}
