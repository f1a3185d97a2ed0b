//! Route definitions for the booking lifecycle.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::booking;
use crate::state::AppState;

/// Booking routes, nested under `/bookings`.
///
/// ```text
/// POST   /                  create_booking
/// GET    /                  list_for_booker
/// GET    /owner             list_for_owner
/// PATCH  /{booking_id}      reply_to_booking
/// GET    /{booking_id}      get_booking
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(booking::create_booking).get(booking::list_for_booker))
        .route("/owner", get(booking::list_for_owner))
        .route(
            "/{booking_id}",
            patch(booking::reply_to_booking).get(booking::get_booking),
        )
}
