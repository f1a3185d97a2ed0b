//! Repository for the `bookings` table.
//!
//! The listing query family mirrors the endpoints: booker-side and
//! owner-side variants of the ALL / FUTURE / CURRENT / PAST / by-status
//! filters, each taking an optional page window. Owner-side queries join
//! through `items` because bookings only store the item id.
//!
//! Boundary asymmetry is deliberate: the booker-side PAST filter is
//! `end_date < now` while the owner-side one is `end_date <= now`.

use sqlx::PgPool;

use lendit_core::pagination::Page;
use lendit_core::types::{DbId, Timestamp};

use crate::models::booking::{Booking, CreateBooking};
use crate::repositories::page_clause;

/// Column list for booking queries.
const COLUMNS: &str = "id, start_date, end_date, item_id, booker_id, status";

/// Column list for owner-side queries that join through `items`.
const PREFIXED_COLUMNS: &str = "b.id, b.start_date, b.end_date, b.item_id, b.booker_id, b.status";

/// Provides CRUD and listing operations for bookings.
pub struct BookingRepo;

impl BookingRepo {
    /// Insert a new booking, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateBooking) -> Result<Booking, sqlx::Error> {
        let query = format!(
            "INSERT INTO bookings (start_date, end_date, item_id, booker_id, status)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.item_id)
            .bind(input.booker_id)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a booking by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Set the booking status, returning the updated row.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!(
            "UPDATE bookings SET status = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Booker-side listings, ordered by start time descending
    // -----------------------------------------------------------------------

    /// All bookings placed by a user.
    pub async fn by_booker(
        pool: &PgPool,
        booker_id: DbId,
        page: Option<Page>,
    ) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bookings
             WHERE booker_id = $1
             ORDER BY start_date DESC{}",
            page_clause(page)
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(booker_id)
            .fetch_all(pool)
            .await
    }

    /// Bookings placed by a user that have not started yet.
    pub async fn by_booker_future(
        pool: &PgPool,
        booker_id: DbId,
        now: Timestamp,
        page: Option<Page>,
    ) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bookings
             WHERE booker_id = $1 AND start_date >= $2
             ORDER BY start_date DESC{}",
            page_clause(page)
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(booker_id)
            .bind(now)
            .fetch_all(pool)
            .await
    }

    /// Bookings placed by a user that are running right now.
    pub async fn by_booker_current(
        pool: &PgPool,
        booker_id: DbId,
        now: Timestamp,
        page: Option<Page>,
    ) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bookings
             WHERE booker_id = $1 AND start_date <= $2 AND end_date >= $2
             ORDER BY start_date DESC{}",
            page_clause(page)
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(booker_id)
            .bind(now)
            .fetch_all(pool)
            .await
    }

    /// Bookings placed by a user that already ended (strictly before `now`).
    pub async fn by_booker_past(
        pool: &PgPool,
        booker_id: DbId,
        now: Timestamp,
        page: Option<Page>,
    ) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bookings
             WHERE booker_id = $1 AND end_date < $2
             ORDER BY start_date DESC{}",
            page_clause(page)
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(booker_id)
            .bind(now)
            .fetch_all(pool)
            .await
    }

    /// Bookings placed by a user, filtered by stored status.
    pub async fn by_booker_status(
        pool: &PgPool,
        booker_id: DbId,
        status: &str,
        page: Option<Page>,
    ) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bookings
             WHERE booker_id = $1 AND status = $2
             ORDER BY start_date DESC{}",
            page_clause(page)
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(booker_id)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Owner-side listings, ordered by start time descending
    // -----------------------------------------------------------------------

    /// All bookings on items owned by a user.
    pub async fn by_owner(
        pool: &PgPool,
        owner_id: DbId,
        page: Option<Page>,
    ) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!(
            "SELECT {PREFIXED_COLUMNS} FROM bookings b
             JOIN items i ON i.id = b.item_id
             WHERE i.owner_id = $1
             ORDER BY b.start_date DESC{}",
            page_clause(page)
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Bookings on a user's items that have not started yet.
    pub async fn by_owner_future(
        pool: &PgPool,
        owner_id: DbId,
        now: Timestamp,
        page: Option<Page>,
    ) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!(
            "SELECT {PREFIXED_COLUMNS} FROM bookings b
             JOIN items i ON i.id = b.item_id
             WHERE i.owner_id = $1 AND b.start_date >= $2
             ORDER BY b.start_date DESC{}",
            page_clause(page)
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(owner_id)
            .bind(now)
            .fetch_all(pool)
            .await
    }

    /// Bookings on a user's items that are running right now.
    pub async fn by_owner_current(
        pool: &PgPool,
        owner_id: DbId,
        now: Timestamp,
        page: Option<Page>,
    ) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!(
            "SELECT {PREFIXED_COLUMNS} FROM bookings b
             JOIN items i ON i.id = b.item_id
             WHERE i.owner_id = $1 AND b.start_date <= $2 AND b.end_date >= $2
             ORDER BY b.start_date DESC{}",
            page_clause(page)
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(owner_id)
            .bind(now)
            .fetch_all(pool)
            .await
    }

    /// Bookings on a user's items that already ended (`end <= now`).
    pub async fn by_owner_past(
        pool: &PgPool,
        owner_id: DbId,
        now: Timestamp,
        page: Option<Page>,
    ) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!(
            "SELECT {PREFIXED_COLUMNS} FROM bookings b
             JOIN items i ON i.id = b.item_id
             WHERE i.owner_id = $1 AND b.end_date <= $2
             ORDER BY b.start_date DESC{}",
            page_clause(page)
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(owner_id)
            .bind(now)
            .fetch_all(pool)
            .await
    }

    /// Bookings on a user's items, filtered by stored status.
    pub async fn by_owner_status(
        pool: &PgPool,
        owner_id: DbId,
        status: &str,
        page: Option<Page>,
    ) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!(
            "SELECT {PREFIXED_COLUMNS} FROM bookings b
             JOIN items i ON i.id = b.item_id
             WHERE i.owner_id = $1 AND b.status = $2
             ORDER BY b.start_date DESC{}",
            page_clause(page)
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(owner_id)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Item-scoped listings
    // -----------------------------------------------------------------------

    /// All bookings of an item, start ascending.
    ///
    /// Feeds both the last/next projection and the comment eligibility check.
    pub async fn list_for_item(pool: &PgPool, item_id: DbId) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bookings WHERE item_id = $1 ORDER BY start_date ASC"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(item_id)
            .fetch_all(pool)
            .await
    }
}
