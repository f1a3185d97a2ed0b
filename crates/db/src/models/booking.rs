//! Booking entity model, DTOs, and the hydrated booking view.

use lendit_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::item::Item;
use crate::models::user::User;

/// Full booking row from the `bookings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: DbId,
    #[serde(rename = "start")]
    pub start_date: Timestamp,
    #[serde(rename = "end")]
    pub end_date: Timestamp,
    pub item_id: DbId,
    pub booker_id: DbId,
    pub status: String,
}

/// Request body for creating a booking.
#[derive(Debug, Deserialize)]
pub struct BookItemRequest {
    pub item_id: DbId,
    pub start: Timestamp,
    pub end: Timestamp,
}

/// Insert DTO carrying the resolved booker and initial status.
#[derive(Debug)]
pub struct CreateBooking {
    pub item_id: DbId,
    pub booker_id: DbId,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub status: String,
}

/// Fully hydrated booking returned by the booking endpoints: the item and
/// the booker are resolved, not just their ids.
#[derive(Debug, Serialize)]
pub struct BookingView {
    pub id: DbId,
    pub start: Timestamp,
    pub end: Timestamp,
    pub status: String,
    pub item: Item,
    pub booker: User,
}

impl BookingView {
    pub fn assemble(booking: Booking, item: Item, booker: User) -> Self {
        Self {
            id: booking.id,
            start: booking.start_date,
            end: booking.end_date,
            status: booking.status,
            item,
            booker,
        }
    }
}
