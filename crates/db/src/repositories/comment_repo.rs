//! Repository for the `comments` table.

use sqlx::PgPool;

use lendit_core::types::DbId;

use crate::models::comment::{Comment, CommentView};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, text, item_id, author_id, created";

/// Provides append and listing operations for comments.
///
/// Comments are append-only; there is no update or delete.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a new comment; `created` is assigned by the database.
    pub async fn create(
        pool: &PgPool,
        item_id: DbId,
        author_id: DbId,
        text: &str,
    ) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (text, item_id, author_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(text)
            .bind(item_id)
            .bind(author_id)
            .fetch_one(pool)
            .await
    }

    /// List an item's comments with author names resolved, oldest first.
    pub async fn list_for_item(
        pool: &PgPool,
        item_id: DbId,
    ) -> Result<Vec<CommentView>, sqlx::Error> {
        sqlx::query_as::<_, CommentView>(
            "SELECT c.id, c.text, u.name AS author_name, c.created
             FROM comments c
             JOIN users u ON u.id = c.author_id
             WHERE c.item_id = $1
             ORDER BY c.created ASC",
        )
        .bind(item_id)
        .fetch_all(pool)
        .await
    }
}
