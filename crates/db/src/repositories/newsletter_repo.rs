//! Repository for the `newsletter_subscribers` table.

use sqlx::PgPool;
use srimitha_core::submission::normalize_email;

use crate::models::newsletter::{NewsletterSubscriber, SubscribeOutcome};

const COLUMNS: &str = "id, email, is_active, created_at, updated_at";

pub struct NewsletterRepo;

impl NewsletterRepo {
    /// Insert a subscriber unless the (normalised) address already exists.
    ///
    /// Uses `ON CONFLICT (email) DO NOTHING`, so concurrent duplicate
    /// subscriptions resolve to exactly one row and neither caller errors.
    pub async fn subscribe(pool: &PgPool, email: &str) -> Result<SubscribeOutcome, sqlx::Error> {
        let query = format!(
            "INSERT INTO newsletter_subscribers (email)
             VALUES ($1)
             ON CONFLICT (email) DO NOTHING
             RETURNING {COLUMNS}"
        );
        let inserted = sqlx::query_as::<_, NewsletterSubscriber>(&query)
            .bind(normalize_email(email))
            .fetch_optional(pool)
            .await?;

        Ok(match inserted {
            Some(row) => SubscribeOutcome::Inserted(row),
            None => SubscribeOutcome::AlreadySubscribed,
        })
    }

    pub async fn find_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<NewsletterSubscriber>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM newsletter_subscribers WHERE email = $1");
        sqlx::query_as::<_, NewsletterSubscriber>(&query)
            .bind(normalize_email(email))
            .fetch_optional(pool)
            .await
    }

    /// Page through subscribers, newest first. Inactive rows are skipped
    /// unless `include_inactive` is set.
    pub async fn list(
        pool: &PgPool,
        limit: i64,
        offset: i64,
        include_inactive: bool,
    ) -> Result<Vec<NewsletterSubscriber>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM newsletter_subscribers
             WHERE ($3 OR is_active)
             ORDER BY created_at DESC, id DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, NewsletterSubscriber>(&query)
            .bind(limit)
            .bind(offset)
            .bind(include_inactive)
            .fetch_all(pool)
            .await
    }
}
