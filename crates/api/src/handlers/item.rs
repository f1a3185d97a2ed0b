//! Handlers for the item catalog and item comments.
//!
//! The item views are where the booking projection surfaces: an owner sees
//! the last/next booking pair on their items, everyone else sees none.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Utc;

use lendit_core::comment::{
    check_comment_eligibility, validate_comment_text, BookingSnapshot, CommentEligibility,
};
use lendit_core::error::CoreError;
use lendit_core::projection;
use lendit_core::types::DbId;
use lendit_db::models::comment::{CommentView, CreateCommentRequest};
use lendit_db::models::item::{CreateItem, Item, ItemView, UpdateItem};
use lendit_db::repositories::{BookingRepo, CommentRepo, ItemRepo, UserRepo};
use sqlx::PgPool;
use validator::Validate;

use crate::error::{validation_message, AppResult};
use crate::extract::SharerUserId;
use crate::handlers::{find_item, find_user};
use crate::query::{optional_page, PageParams, SearchParams};
use crate::state::AppState;

/// POST /items
///
/// List a new item owned by the caller.
pub async fn create_item(
    SharerUserId(user_id): SharerUserId,
    State(state): State<AppState>,
    Json(input): Json<CreateItem>,
) -> AppResult<Json<Item>> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(validation_message(&e)))?;

    let pool = &state.pool;
    let owner = find_user(pool, user_id).await?;
    let item = ItemRepo::create(pool, owner.id, &input).await?;

    tracing::info!(item_id = item.id, owner_id = owner.id, "Item created");
    Ok(Json(item))
}

/// PATCH /items/{item_id}
///
/// Partial update of an item; only its owner may change it. An update by
/// anyone else is reported as 404.
pub async fn update_item(
    SharerUserId(user_id): SharerUserId,
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
    Json(input): Json<UpdateItem>,
) -> AppResult<Json<Item>> {
    let pool = &state.pool;
    let existing = find_item(pool, item_id).await?;
    if existing.owner_id != user_id {
        tracing::warn!(user_id, item_id, "Item update from a non-owner");
        return Err(CoreError::Forbidden(format!(
            "User with id {user_id} does not own item with id {item_id}"
        ))
        .into());
    }

    let updated = ItemRepo::update(pool, item_id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Item",
            id: item_id,
        })?;

    tracing::info!(item_id, user_id, "Item updated");
    Ok(Json(updated))
}

/// GET /items/{item_id}
///
/// Hydrated item view. Booking data is only included for the owner.
pub async fn get_item(
    SharerUserId(user_id): SharerUserId,
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
) -> AppResult<Json<ItemView>> {
    let pool = &state.pool;
    let item = find_item(pool, item_id).await?;
    let comments = CommentRepo::list_for_item(pool, item_id).await?;

    let view = if item.owner_id == user_id {
        owner_view(pool, item, comments).await?
    } else {
        ItemView::from_item(item, comments)
    };
    Ok(Json(view))
}

/// GET /items?from=&size=
///
/// The caller's items as hydrated views. Items with booking data come
/// first, ordered by their last booking's start descending.
pub async fn list_owner_items(
    SharerUserId(user_id): SharerUserId,
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Vec<ItemView>>> {
    let page = optional_page(params.from, params.size)?;
    let pool = &state.pool;
    find_user(pool, user_id).await?;

    let items = ItemRepo::list_by_owner(pool, user_id, page).await?;
    let mut views = Vec::with_capacity(items.len());
    for item in items {
        let comments = CommentRepo::list_for_item(pool, item.id).await?;
        views.push(owner_view(pool, item, comments).await?);
    }

    let ordered = projection::order_by_last_booking(views, |view| {
        view.last_booking.as_ref().map(|booking| booking.start_date)
    });
    Ok(Json(ordered))
}

/// GET /items/search?text=&from=&size=
///
/// Free-text search over available items. Empty text short-circuits to an
/// empty list without touching the store.
pub async fn search_items(
    SharerUserId(user_id): SharerUserId,
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Item>>> {
    let page = optional_page(params.from, params.size)?;
    let pool = &state.pool;
    find_user(pool, user_id).await?;

    if params.text.is_empty() {
        return Ok(Json(Vec::new()));
    }
    let items = ItemRepo::search(pool, &params.text, page).await?;
    Ok(Json(items))
}

/// POST /items/{item_id}/comment
///
/// Add a comment. Only a user with a finished booking of the item may
/// comment; every failure on this path is a 400, including unknown item or
/// user.
pub async fn create_comment(
    SharerUserId(user_id): SharerUserId,
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
    Json(input): Json<CreateCommentRequest>,
) -> AppResult<Json<CommentView>> {
    validate_comment_text(&input.text).map_err(CoreError::Validation)?;

    let pool = &state.pool;
    let item = ItemRepo::find_by_id(pool, item_id)
        .await?
        .ok_or_else(|| CoreError::Validation(format!("Item with id {item_id} not found")))?;
    let author = UserRepo::find_by_id(pool, user_id)
        .await?
        .ok_or_else(|| CoreError::Validation(format!("User with id {user_id} not found")))?;

    let bookings = BookingRepo::list_for_item(pool, item.id).await?;
    let snapshots: Vec<BookingSnapshot> = bookings
        .iter()
        .map(|booking| BookingSnapshot {
            booker_id: booking.booker_id,
            end: booking.end_date,
        })
        .collect();

    match check_comment_eligibility(&snapshots, author.id, Utc::now()) {
        CommentEligibility::Eligible => {}
        CommentEligibility::NeverBooked => {
            tracing::warn!(user_id, item_id, "Comment from a user who never booked the item");
            return Err(
                CoreError::Validation("User has never booked this item".to_string()).into(),
            );
        }
        CommentEligibility::RentalNotFinished => {
            tracing::warn!(user_id, item_id, "Comment before the rental has finished");
            return Err(CoreError::Validation(
                "The item is currently in rental by the user".to_string(),
            )
            .into());
        }
    }

    let comment = CommentRepo::create(pool, item.id, author.id, &input.text).await?;
    tracing::info!(comment_id = comment.id, user_id, item_id, "Comment created");

    Ok(Json(CommentView {
        id: comment.id,
        text: comment.text,
        author_name: author.name,
        created: comment.created,
    }))
}

/// Build the owner-facing view: attach the last/next booking pair when the
/// item has at least two bookings.
async fn owner_view(pool: &PgPool, item: Item, comments: Vec<CommentView>) -> AppResult<ItemView> {
    let bookings = BookingRepo::list_for_item(pool, item.id).await?;
    let mut view = ItemView::from_item(item, comments);
    if let Some((last, next)) = projection::select_last_next(&bookings) {
        view.last_booking = Some(last.clone());
        view.next_booking = Some(next.clone());
    }
    Ok(view)
}
