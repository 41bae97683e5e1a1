//! Repository for the `events` table.

use sqlx::{PgExecutor, PgPool};
use srimitha_core::events::EventWindow;
use srimitha_core::types::{DbId, Timestamp};

use crate::models::event::{CreateEvent, Event};

const COLUMNS: &str = "id, title, description, start_date, end_date, location, image, \
                       capacity, registration_url, is_active, created_at, updated_at";

/// Provides data access for workshops and events.
pub struct EventRepo;

impl EventRepo {
    pub async fn create(
        executor: impl PgExecutor<'_>,
        input: &CreateEvent,
    ) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events
                (title, description, start_date, end_date, location, image,
                 capacity, registration_url, is_active)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.location)
            .bind(&input.image)
            .bind(input.capacity)
            .bind(&input.registration_url)
            .bind(input.is_active)
            .fetch_one(executor)
            .await
    }

    /// List active events on one side of `now`.
    ///
    /// - [`EventWindow::Upcoming`]: `start_date >= now`, soonest first.
    /// - [`EventWindow::Past`]: `start_date < now`, most recent first.
    pub async fn list_window(
        pool: &PgPool,
        window: EventWindow,
        now: Timestamp,
    ) -> Result<Vec<Event>, sqlx::Error> {
        let (predicate, order) = match window {
            EventWindow::Upcoming => ("start_date >= $1", "start_date ASC, id ASC"),
            EventWindow::Past => ("start_date < $1", "start_date DESC, id DESC"),
        };
        let query = format!(
            "SELECT {COLUMNS} FROM events
             WHERE is_active AND {predicate}
             ORDER BY {order}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(now)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
