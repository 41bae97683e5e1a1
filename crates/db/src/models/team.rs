use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use srimitha_core::types::{DbId, Timestamp};

/// A row from the `team` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: DbId,
    pub name: String,
    pub position: String,
    pub bio: Option<String>,
    pub image: Option<String>,
    /// Network name -> profile URL, e.g. `{"linkedin": "https://..."}`.
    pub social_links: Option<serde_json::Value>,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeamMember {
    pub name: String,
    pub position: String,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub social_links: Option<serde_json::Value>,
    pub sort_order: i32,
}
