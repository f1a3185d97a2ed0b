//! Route definitions for the user directory.

use axum::routing::{patch, post};
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// User routes, nested under `/users`.
///
/// ```text
/// POST   /              create_user
/// GET    /              list_users
/// PATCH  /{user_id}     update_user
/// GET    /{user_id}     get_user
/// DELETE /{user_id}     delete_user
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(user::create_user).get(user::list_users))
        .route(
            "/{user_id}",
            patch(user::update_user)
                .get(user::get_user)
                .delete(user::delete_user),
        )
}
