//! Repository for the `item_requests` table.

use sqlx::PgPool;

use lendit_core::pagination::Page;
use lendit_core::types::DbId;

use crate::models::request::ItemRequest;
use crate::repositories::page_clause;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, description, requester_id, created";

/// Provides CRUD operations for item requests.
pub struct ItemRequestRepo;

impl ItemRequestRepo {
    /// Insert a new request; `created` is assigned by the database.
    pub async fn create(
        pool: &PgPool,
        requester_id: DbId,
        description: &str,
    ) -> Result<ItemRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO item_requests (description, requester_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ItemRequest>(&query)
            .bind(description)
            .bind(requester_id)
            .fetch_one(pool)
            .await
    }

    /// Find a request by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ItemRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM item_requests WHERE id = $1");
        sqlx::query_as::<_, ItemRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// A user's own requests, newest first.
    pub async fn list_for_requester(
        pool: &PgPool,
        requester_id: DbId,
    ) -> Result<Vec<ItemRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM item_requests
             WHERE requester_id = $1
             ORDER BY created DESC"
        );
        sqlx::query_as::<_, ItemRequest>(&query)
            .bind(requester_id)
            .fetch_all(pool)
            .await
    }

    /// Other users' requests, newest first.
    pub async fn list_for_others(
        pool: &PgPool,
        requester_id: DbId,
        page: Option<Page>,
    ) -> Result<Vec<ItemRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM item_requests
             WHERE requester_id <> $1
             ORDER BY created DESC{}",
            page_clause(page)
        );
        sqlx::query_as::<_, ItemRequest>(&query)
            .bind(requester_id)
            .fetch_all(pool)
            .await
    }
}
