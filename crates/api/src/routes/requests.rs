//! Route definitions for item requests.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::request;
use crate::state::AppState;

/// Item-request routes, nested under `/requests`.
///
/// ```text
/// POST   /                  create_request
/// GET    /                  list_own_requests
/// GET    /all               list_other_requests
/// GET    /{request_id}      get_request
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(request::create_request).get(request::list_own_requests),
        )
        .route("/all", get(request::list_other_requests))
        .route("/{request_id}", get(request::get_request))
}
