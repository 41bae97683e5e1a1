//! Repository for the `projects` table.

use sqlx::{PgExecutor, PgPool};

use crate::models::project::{CreateProject, Project};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, image, category, client, completion_date, \
                       slug, created_at, updated_at";

/// Provides data access for portfolio projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(
        executor: impl PgExecutor<'_>,
        input: &CreateProject,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects
                (title, description, image, category, client, completion_date, slug)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image)
            .bind(&input.category)
            .bind(&input.client)
            .bind(input.completion_date)
            .bind(&input.slug)
            .fetch_one(executor)
            .await
    }

    /// List projects, most recently completed first. Projects without a
    /// completion date sort last.
    ///
    /// When `category` is given only rows whose category equals it exactly
    /// (case-sensitive) are returned.
    pub async fn list(pool: &PgPool, category: Option<&str>) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE ($1::TEXT IS NULL OR category = $1)
             ORDER BY completion_date DESC NULLS LAST, id DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(category)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE slug = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }
}
