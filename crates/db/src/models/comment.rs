//! Comment entity model and the author-resolved view.

use lendit_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full comment row from the `comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub text: String,
    pub item_id: DbId,
    pub author_id: DbId,
    pub created: Timestamp,
}

/// Request body for adding a comment to an item.
#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub text: String,
}

/// Comment with the author's name resolved for display.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CommentView {
    pub id: DbId,
    pub text: String,
    pub author_name: String,
    pub created: Timestamp,
}
