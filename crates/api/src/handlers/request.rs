//! Handlers for item requests ("I'm looking for an item").
//!
//! Independent of the booking state machine; items listed in response to a
//! request are attached to its view.

use axum::extract::{Path, Query, State};
use axum::Json;

use lendit_core::error::CoreError;
use lendit_core::types::DbId;
use lendit_db::models::request::{CreateItemRequest, ItemRequest, ItemRequestView};
use lendit_db::repositories::{ItemRepo, ItemRequestRepo};
use sqlx::PgPool;
use validator::Validate;

use crate::error::{validation_message, AppResult};
use crate::extract::SharerUserId;
use crate::handlers::find_user;
use crate::query::{optional_page, PageParams};
use crate::state::AppState;

/// POST /requests
pub async fn create_request(
    SharerUserId(user_id): SharerUserId,
    State(state): State<AppState>,
    Json(input): Json<CreateItemRequest>,
) -> AppResult<Json<ItemRequestView>> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(validation_message(&e)))?;

    let pool = &state.pool;
    let requester = find_user(pool, user_id).await?;
    let request = ItemRequestRepo::create(pool, requester.id, &input.description).await?;

    tracing::info!(request_id = request.id, user_id, "Item request created");
    Ok(Json(ItemRequestView::assemble(request, Vec::new())))
}

/// GET /requests
///
/// The caller's own requests, newest first.
pub async fn list_own_requests(
    SharerUserId(user_id): SharerUserId,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ItemRequestView>>> {
    let pool = &state.pool;
    find_user(pool, user_id).await?;
    let requests = ItemRequestRepo::list_for_requester(pool, user_id).await?;
    hydrate(pool, requests).await.map(Json)
}

/// GET /requests/all?from=&size=
///
/// Other users' requests, newest first.
pub async fn list_other_requests(
    SharerUserId(user_id): SharerUserId,
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Vec<ItemRequestView>>> {
    let page = optional_page(params.from, params.size)?;
    let pool = &state.pool;
    find_user(pool, user_id).await?;
    let requests = ItemRequestRepo::list_for_others(pool, user_id, page).await?;
    hydrate(pool, requests).await.map(Json)
}

/// GET /requests/{request_id}
pub async fn get_request(
    SharerUserId(user_id): SharerUserId,
    State(state): State<AppState>,
    Path(request_id): Path<DbId>,
) -> AppResult<Json<ItemRequestView>> {
    let pool = &state.pool;
    find_user(pool, user_id).await?;

    let request = ItemRequestRepo::find_by_id(pool, request_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "ItemRequest",
            id: request_id,
        })?;

    let items = ItemRepo::list_by_request(pool, request.id).await?;
    Ok(Json(ItemRequestView::assemble(request, items)))
}

/// Attach responding items to each request.
async fn hydrate(
    pool: &PgPool,
    requests: Vec<ItemRequest>,
) -> AppResult<Vec<ItemRequestView>> {
    let mut views = Vec::with_capacity(requests.len());
    for request in requests {
        let items = ItemRepo::list_by_request(pool, request.id).await?;
        views.push(ItemRequestView::assemble(request, items));
    }
    Ok(views)
}
