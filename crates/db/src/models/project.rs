//! Portfolio project model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use srimitha_core::types::{DbId, Timestamp};

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: String,
    pub client: Option<String>,
    pub completion_date: Option<Timestamp>,
    pub slug: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: String,
    pub client: Option<String>,
    pub completion_date: Option<Timestamp>,
    pub slug: String,
}

/// Query parameters for `GET /projects`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectListParams {
    /// Exact, case-sensitive category match.
    pub category: Option<String>,
}
