//! Admin login: a single shared password compared against configuration.
//!
//! Deliberately minimal; the admin surface is protected by this one
//! password and network placement, not per-user accounts.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use lectern_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginBody {
    pub password: String,
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginBody>,
) -> AppResult<Json<serde_json::Value>> {
    if body.password == state.config.admin_password {
        Ok(Json(json!({ "success": true })))
    } else {
        Err(AppError::Core(CoreError::Unauthorized(
            "Invalid password".into(),
        )))
    }
}
