use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use srimitha_core::types::{DbId, Timestamp};

/// A row from the `collaborations` table (industry and academic partners).
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Collaboration {
    pub id: DbId,
    pub name: String,
    pub logo: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCollaboration {
    pub name: String,
    pub logo: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    /// Defaults to `true` if omitted.
    pub is_active: Option<bool>,
    pub sort_order: i32,
}
