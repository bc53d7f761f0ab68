//! Counts every HTTP request served.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::state::AppState;

/// Increments the request counter before handing off to the next layer.
///
/// Mounted outside the CORS layer so preflights and 404s are counted too.
///
/// ```rust,ignore
/// let app = router.layer(middleware::from_fn_with_state(state.clone(), request_counter::layer));
/// ```
pub async fn layer(State(st): State<AppState>, req: Request, next: Next) -> Response {
    st.stats.record_request();
    next.run(req).await
}
