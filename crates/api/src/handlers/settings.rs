//! Site settings handlers.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use srimitha_core::error::CoreError;
use srimitha_core::settings::SiteSettings;
use srimitha_db::repositories::SettingRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SettingEntry {
    pub key: String,
    pub value: String,
}

/// GET /api/settings
///
/// Folds every stored row into [`SiteSettings`] and serves it as a flat
/// key -> value map. Rows that fail validation are logged and replaced by
/// the bundled default.
pub async fn get_settings(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = SettingRepo::list_all(&state.pool).await?;
    let (settings, rejected) = SiteSettings::from_pairs(rows.into_iter().map(|s| (s.key, s.value)));

    for r in &rejected {
        tracing::warn!(key = %r.key, value = %r.value, reason = r.reason, "Ignoring invalid setting");
    }

    Ok(Json(settings))
}

/// GET /api/settings/{key}
pub async fn get_setting(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<impl IntoResponse> {
    let setting = SettingRepo::find_by_key(&state.pool, &key)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Setting", &key)))?;

    Ok(Json(SettingEntry {
        key: setting.key,
        value: setting.value,
    }))
}
