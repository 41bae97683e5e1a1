//! Repository for the `collaborations` table.

use sqlx::{PgExecutor, PgPool};

use crate::models::collaboration::{Collaboration, CreateCollaboration};

const COLUMNS: &str =
    "id, name, logo, website, description, is_active, sort_order, created_at, updated_at";

pub struct CollaborationRepo;

impl CollaborationRepo {
    pub async fn create(
        executor: impl PgExecutor<'_>,
        input: &CreateCollaboration,
    ) -> Result<Collaboration, sqlx::Error> {
        let query = format!(
            "INSERT INTO collaborations (name, logo, website, description, is_active, sort_order)
             VALUES ($1, $2, $3, $4, COALESCE($5, true), $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Collaboration>(&query)
            .bind(&input.name)
            .bind(&input.logo)
            .bind(&input.website)
            .bind(&input.description)
            .bind(input.is_active)
            .bind(input.sort_order)
            .fetch_one(executor)
            .await
    }

    /// List active collaborations by display rank.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Collaboration>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM collaborations
             WHERE is_active
             ORDER BY sort_order ASC, id ASC"
        );
        sqlx::query_as::<_, Collaboration>(&query)
            .fetch_all(pool)
            .await
    }
}
