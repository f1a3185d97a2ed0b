//! Route definitions for the item catalog and comments.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::item;
use crate::state::AppState;

/// Item routes, nested under `/items`.
///
/// ```text
/// POST   /                       create_item
/// GET    /                       list_owner_items
/// GET    /search                 search_items
/// PATCH  /{item_id}              update_item
/// GET    /{item_id}              get_item
/// POST   /{item_id}/comment      create_comment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(item::create_item).get(item::list_owner_items))
        .route("/search", get(item::search_items))
        .route("/{item_id}", patch(item::update_item).get(item::get_item))
        .route("/{item_id}/comment", post(item::create_comment))
}
