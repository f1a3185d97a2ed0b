//! Route tree, one module per aggregate.

pub mod bookings;
pub mod health;
pub mod items;
pub mod requests;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree.
///
/// Route hierarchy:
///
/// ```text
/// /bookings                         create, list for caller as booker
/// /bookings/owner                   list for caller as owner
/// /bookings/{booking_id}            owner decision (PATCH), fetch (GET)
///
/// /items                            create, list caller's items
/// /items/search                     free-text search
/// /items/{item_id}                  update (PATCH), fetch (GET)
/// /items/{item_id}/comment          add comment
///
/// /users                            create, list
/// /users/{user_id}                  update, fetch, delete
///
/// /requests                         create, list caller's own
/// /requests/all                     other users' requests
/// /requests/{request_id}            fetch
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/bookings", bookings::router())
        .nest("/items", items::router())
        .nest("/users", users::router())
        .nest("/requests", requests::router())
}
