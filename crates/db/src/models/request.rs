//! Item-request entity model and view.
//!
//! An item request is a user's ask for an item that does not exist in the
//! catalog yet; items listed in response carry the request's id.

use lendit_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::item::Item;

/// Full row from the `item_requests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ItemRequest {
    pub id: DbId,
    pub description: String,
    pub requester_id: DbId,
    pub created: Timestamp,
}

/// DTO for creating a new item request.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateItemRequest {
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
}

/// Item request with the items listed in response to it.
#[derive(Debug, Serialize)]
pub struct ItemRequestView {
    pub id: DbId,
    pub description: String,
    pub requester_id: DbId,
    pub created: Timestamp,
    pub items: Vec<Item>,
}

impl ItemRequestView {
    pub fn assemble(request: ItemRequest, items: Vec<Item>) -> Self {
        Self {
            id: request.id,
            description: request.description,
            requester_id: request.requester_id,
            created: request.created,
            items,
        }
    }
}
