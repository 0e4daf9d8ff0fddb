//! Admin export: a JSON dump of every table, served as a download.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use lectern_db::models::lecture::LectureFilter;
use lectern_db::repositories::{
    LectureRepo, SiteSettingRepo, SlideRepo, SummaryRepo, TranscriptRepo,
};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/admin/export
pub async fn export(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let lectures = LectureRepo::list(&state.pool, &LectureFilter::default()).await?;
    let transcripts = TranscriptRepo::list_all(&state.pool).await?;
    let slides = SlideRepo::list_all(&state.pool).await?;
    let summaries = SummaryRepo::list_all(&state.pool).await?;
    let site_settings = SiteSettingRepo::list_all(&state.pool).await?;

    let now = chrono::Utc::now();
    let body = json!({
        "timestamp": now.to_rfc3339(),
        "lectures": lectures,
        "transcripts": transcripts,
        "slides": slides,
        "summaries": summaries,
        "siteSettings": site_settings,
    });

    let filename = format!("lectern-backup-{}.json", now.format("%Y-%m-%d"));
    Ok((
        [(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        )],
        Json(body),
    ))
}
