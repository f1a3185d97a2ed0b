//! Item entity model, DTOs, and the hydrated item view.

use lendit_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::booking::Booking;
use crate::models::comment::CommentView;

/// Full item row from the `items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Item {
    pub id: DbId,
    pub name: String,
    pub description: String,
    #[serde(rename = "available")]
    pub is_available: bool,
    pub owner_id: DbId,
    pub request_id: Option<DbId>,
}

/// DTO for listing a new item.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateItem {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    pub available: bool,
    /// Set when the item is listed in response to an item request.
    pub request_id: Option<DbId>,
}

/// DTO for a partial item update. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
}

/// Hydrated item view returned by the item endpoints.
///
/// `last_booking`/`next_booking` are populated only for the item's owner;
/// comments are visible to everyone.
#[derive(Debug, Serialize)]
pub struct ItemView {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: DbId,
    pub request_id: Option<DbId>,
    pub last_booking: Option<Booking>,
    pub next_booking: Option<Booking>,
    pub comments: Vec<CommentView>,
}

impl ItemView {
    /// Build a view from an item row with no booking projection.
    pub fn from_item(item: Item, comments: Vec<CommentView>) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            available: item.is_available,
            owner_id: item.owner_id,
            request_id: item.request_id,
            last_booking: None,
            next_booking: None,
            comments,
        }
    }
}
