//! Repository for the `services` table.

use sqlx::{PgExecutor, PgPool};

use crate::models::service::{CreateService, Service};

const COLUMNS: &str = "id, title, description, icon, slug, created_at, updated_at";

/// Provides data access for service offerings.
pub struct ServiceRepo;

impl ServiceRepo {
    /// Insert a new service, returning the created row.
    pub async fn create(
        executor: impl PgExecutor<'_>,
        input: &CreateService,
    ) -> Result<Service, sqlx::Error> {
        let query = format!(
            "INSERT INTO services (title, description, icon, slug)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.icon)
            .bind(&input.slug)
            .fetch_one(executor)
            .await
    }

    /// List all services, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Service>(&query).fetch_all(pool).await
    }

    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services WHERE slug = $1");
        sqlx::query_as::<_, Service>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }
}
