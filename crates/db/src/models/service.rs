//! Service offering model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use srimitha_core::types::{DbId, Timestamp};

/// A row from the `services` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: DbId,
    pub title: String,
    pub description: String,
    /// Icon tag understood by the frontend icon set (e.g. `bolt`, `sun`).
    pub icon: String,
    pub slug: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a service.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateService {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub slug: String,
}
