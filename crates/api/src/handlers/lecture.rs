//! Handlers for the `/lectures` resource: the lecture aggregate plus the
//! pipeline submission endpoint.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use lectern_core::error::CoreError;
use lectern_core::types::DbId;
use lectern_db::models::lecture::{
    CreateLecture, Lecture, LectureDetail, LectureFilter, UpdateLecture,
};
use lectern_db::repositories::LectureRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for the listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Case-insensitive contains on title, category, or subcategory.
    pub search: Option<String>,
    /// Exact category match.
    pub category: Option<String>,
    /// `true` restricts to published lectures (the public pages always set
    /// this); absent means admin listing across all publish states.
    pub published: Option<bool>,
}

/// GET /api/v1/lectures
///
/// Public callers (`published=true`) degrade to an empty list on store
/// failure so visitor pages render instead of erroring; the admin listing
/// propagates the failure.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Lecture>>> {
    let filter = LectureFilter {
        published: params.published,
        search: params.search,
        category: params.category,
    };
    let public = filter.published == Some(true);

    match LectureRepo::list(&state.pool, &filter).await {
        Ok(lectures) => Ok(Json(lectures)),
        Err(error) if public => {
            tracing::error!(%error, "Public lecture listing failed; returning empty list");
            Ok(Json(Vec::new()))
        }
        Err(error) => Err(error.into()),
    }
}

/// POST /api/v1/lectures
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateLecture>,
) -> AppResult<Json<Lecture>> {
    let lecture = LectureRepo::create(&state.pool, &input).await?;
    Ok(Json(lecture))
}

/// GET /api/v1/lectures/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<LectureDetail>> {
    let detail = LectureRepo::get_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Lecture",
            id,
        }))?;
    Ok(Json(detail))
}

/// PUT /api/v1/lectures/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLecture>,
) -> AppResult<Json<serde_json::Value>> {
    LectureRepo::update(&state.pool, id, &input).await?;
    Ok(Json(json!({ "success": true })))
}

/// DELETE /api/v1/lectures/{id}
///
/// Idempotent: deleting a missing lecture still reports success.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    LectureRepo::delete(&state.pool, id).await?;
    Ok(Json(json!({ "success": true })))
}

/// POST /api/v1/lectures/{id}/process
///
/// Submit a lecture to the ingestion pipeline. Returns immediately; the
/// caller polls the lecture's `status` field for the outcome.
pub async fn process(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    LectureRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Lecture",
            id,
        }))?;

    state
        .pipeline
        .submit(id)
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    Ok(Json(json!({
        "message": "Processing started",
        "lectureId": id,
    })))
}
