//! Handlers for the `/settings` key/value store.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::Json;
use serde_json::json;

use lectern_db::repositories::SiteSettingRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/settings
///
/// Returns the full key → value map. Missing keys are simply absent;
/// clients apply their own defaults.
pub async fn get_all(
    State(state): State<AppState>,
) -> AppResult<Json<BTreeMap<String, Option<String>>>> {
    let settings = SiteSettingRepo::get_all(&state.pool).await?;
    Ok(Json(settings))
}

/// POST /api/v1/settings
///
/// Upserts every key/value pair in the body. Idempotent.
pub async fn set_many(
    State(state): State<AppState>,
    Json(settings): Json<BTreeMap<String, String>>,
) -> AppResult<Json<serde_json::Value>> {
    SiteSettingRepo::set_many(&state.pool, &settings).await?;
    Ok(Json(json!({ "success": true })))
}
