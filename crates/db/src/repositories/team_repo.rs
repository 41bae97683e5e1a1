//! Repository for the `team` table.

use sqlx::{PgExecutor, PgPool};

use crate::models::team::{CreateTeamMember, TeamMember};

const COLUMNS: &str =
    "id, name, position, bio, image, social_links, sort_order, created_at, updated_at";

pub struct TeamRepo;

impl TeamRepo {
    pub async fn create(
        executor: impl PgExecutor<'_>,
        input: &CreateTeamMember,
    ) -> Result<TeamMember, sqlx::Error> {
        let query = format!(
            "INSERT INTO team (name, position, bio, image, social_links, sort_order)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(&input.name)
            .bind(&input.position)
            .bind(&input.bio)
            .bind(&input.image)
            .bind(&input.social_links)
            .bind(input.sort_order)
            .fetch_one(executor)
            .await
    }

    /// List all team members by display rank.
    pub async fn list(pool: &PgPool) -> Result<Vec<TeamMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM team ORDER BY sort_order ASC, id ASC");
        sqlx::query_as::<_, TeamMember>(&query).fetch_all(pool).await
    }
}
