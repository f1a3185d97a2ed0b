//! Repository for the `items` table.

use sqlx::PgPool;

use lendit_core::pagination::Page;
use lendit_core::types::DbId;

use crate::models::item::{CreateItem, Item, UpdateItem};
use crate::repositories::page_clause;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, is_available, owner_id, request_id";

/// Provides CRUD and search operations for items.
pub struct ItemRepo;

impl ItemRepo {
    /// Insert a new item owned by `owner_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateItem,
    ) -> Result<Item, sqlx::Error> {
        let query = format!(
            "INSERT INTO items (name, description, is_available, owner_id, request_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.available)
            .bind(owner_id)
            .bind(input.request_id)
            .fetch_one(pool)
            .await
    }

    /// Find an item by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE id = $1");
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update an item. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateItem,
    ) -> Result<Option<Item>, sqlx::Error> {
        let query = format!(
            "UPDATE items SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                is_available = COALESCE($4, is_available)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.available)
            .fetch_optional(pool)
            .await
    }

    /// List a user's items in insertion order.
    pub async fn list_by_owner(
        pool: &PgPool,
        owner_id: DbId,
        page: Option<Page>,
    ) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM items WHERE owner_id = $1 ORDER BY id ASC{}",
            page_clause(page)
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring search over name and description of
    /// available items.
    pub async fn search(
        pool: &PgPool,
        text: &str,
        page: Option<Page>,
    ) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM items
             WHERE is_available = TRUE
               AND (name ILIKE '%' || $1 || '%' OR description ILIKE '%' || $1 || '%')
             ORDER BY id ASC{}",
            page_clause(page)
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(text)
            .fetch_all(pool)
            .await
    }

    /// Set the availability flag. Returns `true` if a row was updated.
    pub async fn set_availability(
        pool: &PgPool,
        id: DbId,
        available: bool,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE items SET is_available = $2 WHERE id = $1")
            .bind(id)
            .bind(available)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Items listed in response to an item request.
    pub async fn list_by_request(
        pool: &PgPool,
        request_id: DbId,
    ) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE request_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Item>(&query)
            .bind(request_id)
            .fetch_all(pool)
            .await
    }
}
