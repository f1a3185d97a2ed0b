//! Handlers for the booking lifecycle.
//!
//! A booking is created `WAITING` by a non-owner against an available item,
//! decided exactly once by the item's owner, and queried through
//! state-filtered listings. Authorization failures are reported as 404 (see
//! `crate::error`).

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Utc;

use lendit_core::booking::{self, BookingState, STATUS_REJECTED, STATUS_WAITING};
use lendit_core::error::CoreError;
use lendit_core::types::DbId;
use lendit_db::models::booking::{BookItemRequest, Booking, BookingView, CreateBooking};
use lendit_db::repositories::{BookingRepo, ItemRepo};
use sqlx::PgPool;

use crate::error::AppResult;
use crate::extract::SharerUserId;
use crate::handlers::{find_booking, find_item, find_user};
use crate::query::{optional_page, ApprovedParam, BookingListParams};
use crate::state::AppState;

/// POST /bookings
///
/// Create a booking request for an item. The rental window is validated
/// before the item is even resolved; self-booking is rejected last.
pub async fn create_booking(
    SharerUserId(booker_id): SharerUserId,
    State(state): State<AppState>,
    Json(input): Json<BookItemRequest>,
) -> AppResult<Json<BookingView>> {
    let pool = &state.pool;
    let booker = find_user(pool, booker_id).await?;

    booking::validate_rental_window(input.start, input.end, Utc::now()).map_err(|msg| {
        tracing::warn!(booker_id, item_id = input.item_id, "Rejected booking: {msg}");
        CoreError::Validation(msg)
    })?;

    let item = find_item(pool, input.item_id).await?;
    if !item.is_available {
        tracing::warn!(booker_id, item_id = item.id, "Item is not available for rental");
        return Err(CoreError::Validation(format!(
            "Item with id {} is not available for rental",
            item.id
        ))
        .into());
    }
    if item.owner_id == booker.id {
        tracing::warn!(booker_id, item_id = item.id, "Attempt to book own item");
        return Err(CoreError::Forbidden("A user cannot book their own item".into()).into());
    }

    let created = BookingRepo::create(
        pool,
        &CreateBooking {
            item_id: item.id,
            booker_id: booker.id,
            start_date: input.start,
            end_date: input.end,
            status: STATUS_WAITING.to_string(),
        },
    )
    .await?;

    tracing::info!(
        booking_id = created.id,
        booker_id,
        item_id = item.id,
        "Booking created"
    );

    Ok(Json(BookingView::assemble(created, item, booker)))
}

/// PATCH /bookings/{booking_id}?approved=bool
///
/// Owner decision on a waiting booking. A second call on the same booking
/// fails because the status is no longer `WAITING`.
pub async fn reply_to_booking(
    SharerUserId(owner_id): SharerUserId,
    State(state): State<AppState>,
    Path(booking_id): Path<DbId>,
    Query(params): Query<ApprovedParam>,
) -> AppResult<Json<BookingView>> {
    let pool = &state.pool;
    let existing = find_booking(pool, booking_id).await?;
    let mut item = find_item(pool, existing.item_id).await?;

    if item.owner_id != owner_id {
        tracing::warn!(owner_id, booking_id, "Reply from a user who does not own the item");
        return Err(CoreError::Forbidden(format!(
            "User with id {owner_id} does not own item with id {}",
            item.id
        ))
        .into());
    }

    let next_status = booking::decide_reply(&existing.status, params.approved).map_err(|msg| {
        tracing::warn!(owner_id, booking_id, status = %existing.status, "Rejected reply: {msg}");
        CoreError::Validation(msg)
    })?;

    let updated = BookingRepo::update_status(pool, existing.id, next_status)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Booking",
            id: existing.id,
        })?;

    // Policy point: approval can take the item off the market.
    if params.approved && state.config.lock_item_on_approve {
        ItemRepo::set_availability(pool, item.id, false).await?;
        item.is_available = false;
    }

    tracing::info!(booking_id, owner_id, status = next_status, "Booking decided");

    let booker = find_user(pool, updated.booker_id).await?;
    Ok(Json(BookingView::assemble(updated, item, booker)))
}

/// GET /bookings/{booking_id}
///
/// Fetch a booking for its booker or the item's owner. Any other caller
/// gets the same 404 a missing booking would produce.
pub async fn get_booking(
    SharerUserId(user_id): SharerUserId,
    State(state): State<AppState>,
    Path(booking_id): Path<DbId>,
) -> AppResult<Json<BookingView>> {
    let pool = &state.pool;
    let booking = find_booking(pool, booking_id).await?;
    let item = find_item(pool, booking.item_id).await?;

    if item.owner_id != user_id && booking.booker_id != user_id {
        tracing::warn!(user_id, booking_id, "Booking queried by an unrelated user");
        return Err(CoreError::Forbidden(format!(
            "Booking with id {booking_id} is not visible to user with id {user_id}"
        ))
        .into());
    }

    let booker = find_user(pool, booking.booker_id).await?;
    Ok(Json(BookingView::assemble(booking, item, booker)))
}

/// GET /bookings?state=&from=&size=
///
/// List the caller's bookings as booker, newest start first.
pub async fn list_for_booker(
    SharerUserId(user_id): SharerUserId,
    State(state): State<AppState>,
    Query(params): Query<BookingListParams>,
) -> AppResult<Json<Vec<BookingView>>> {
    let filter = parse_state(params.state.as_deref())?;
    let page = optional_page(params.from, params.size)?;
    let pool = &state.pool;
    find_user(pool, user_id).await?;

    let now = Utc::now();
    let bookings = match filter {
        BookingState::All => BookingRepo::by_booker(pool, user_id, page).await?,
        BookingState::Future => BookingRepo::by_booker_future(pool, user_id, now, page).await?,
        BookingState::Current => BookingRepo::by_booker_current(pool, user_id, now, page).await?,
        BookingState::Past => BookingRepo::by_booker_past(pool, user_id, now, page).await?,
        BookingState::Waiting => {
            BookingRepo::by_booker_status(pool, user_id, STATUS_WAITING, page).await?
        }
        BookingState::Rejected => {
            BookingRepo::by_booker_status(pool, user_id, STATUS_REJECTED, page).await?
        }
    };

    hydrate(pool, bookings).await.map(Json)
}

/// GET /bookings/owner?state=&from=&size=
///
/// List the bookings on the caller's items, newest start first.
pub async fn list_for_owner(
    SharerUserId(owner_id): SharerUserId,
    State(state): State<AppState>,
    Query(params): Query<BookingListParams>,
) -> AppResult<Json<Vec<BookingView>>> {
    let filter = parse_state(params.state.as_deref())?;
    let page = optional_page(params.from, params.size)?;
    let pool = &state.pool;
    find_user(pool, owner_id).await?;

    let now = Utc::now();
    let bookings = match filter {
        BookingState::All => BookingRepo::by_owner(pool, owner_id, page).await?,
        BookingState::Future => BookingRepo::by_owner_future(pool, owner_id, now, page).await?,
        BookingState::Current => BookingRepo::by_owner_current(pool, owner_id, now, page).await?,
        BookingState::Past => BookingRepo::by_owner_past(pool, owner_id, now, page).await?,
        BookingState::Waiting => {
            BookingRepo::by_owner_status(pool, owner_id, STATUS_WAITING, page).await?
        }
        BookingState::Rejected => {
            BookingRepo::by_owner_status(pool, owner_id, STATUS_REJECTED, page).await?
        }
    };

    hydrate(pool, bookings).await.map(Json)
}

/// Parse the optional `state` token; absent means `ALL`.
fn parse_state(raw: Option<&str>) -> AppResult<BookingState> {
    match raw {
        None => Ok(BookingState::All),
        Some(raw) => raw
            .parse()
            .map_err(|msg: String| CoreError::Validation(msg).into()),
    }
}

/// Resolve item and booker for each booking row.
async fn hydrate(pool: &PgPool, bookings: Vec<Booking>) -> AppResult<Vec<BookingView>> {
    let mut views = Vec::with_capacity(bookings.len());
    for booking in bookings {
        let item = find_item(pool, booking.item_id).await?;
        let booker = find_user(pool, booking.booker_id).await?;
        views.push(BookingView::assemble(booking, item, booker));
    }
    Ok(views)
}
