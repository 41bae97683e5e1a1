//! Repository for the `settings` key/value table.

use sqlx::{PgExecutor, PgPool};

use crate::models::setting::{CreateSetting, Setting};

const COLUMNS: &str = "id, key, value, created_at, updated_at";

pub struct SettingRepo;

impl SettingRepo {
    pub async fn create(
        executor: impl PgExecutor<'_>,
        input: &CreateSetting,
    ) -> Result<Setting, sqlx::Error> {
        let query = format!(
            "INSERT INTO settings (key, value)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Setting>(&query)
            .bind(&input.key)
            .bind(&input.value)
            .fetch_one(executor)
            .await
    }

    /// All rows, ordered by key.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Setting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM settings ORDER BY key");
        sqlx::query_as::<_, Setting>(&query).fetch_all(pool).await
    }

    pub async fn find_by_key(pool: &PgPool, key: &str) -> Result<Option<Setting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM settings WHERE key = $1");
        sqlx::query_as::<_, Setting>(&query)
            .bind(key)
            .fetch_optional(pool)
            .await
    }
}
