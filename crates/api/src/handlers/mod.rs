//! Request handlers, one module per aggregate.

pub mod booking;
pub mod item;
pub mod request;
pub mod user;

use lendit_core::error::CoreError;
use lendit_core::types::DbId;
use lendit_db::models::booking::Booking;
use lendit_db::models::item::Item;
use lendit_db::models::user::User;
use lendit_db::repositories::{BookingRepo, ItemRepo, UserRepo};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

/// Fetch a user or fail with 404.
pub(crate) async fn find_user(pool: &PgPool, id: DbId) -> AppResult<User> {
    UserRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))
}

/// Fetch an item or fail with 404.
pub(crate) async fn find_item(pool: &PgPool, id: DbId) -> AppResult<Item> {
    ItemRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Item", id }))
}

/// Fetch a booking or fail with 404.
pub(crate) async fn find_booking(pool: &PgPool, id: DbId) -> AppResult<Booking> {
    BookingRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))
}
