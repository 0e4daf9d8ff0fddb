//! Handler for cover-image generation.

use axum::extract::State;
use axum::Json;
use base64::Engine;
use serde::Deserialize;
use serde_json::json;

use lectern_core::error::CoreError;
use lectern_covergen::{CoverRequest, PromptTemplate};
use lectern_storage::UploadFile;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCoverBody {
    pub title: String,
    pub category: Option<String>,
    pub summary: Option<String>,
    /// Unused by prompt assembly today; accepted for contract stability.
    #[allow(dead_code)]
    pub transcript: Option<String>,
    pub prompt_template: Option<String>,
    pub custom_prompt: Option<String>,
    /// When true and storage is configured, the image is uploaded and a
    /// hosted URL returned instead of a data URI.
    pub persist: Option<bool>,
}

/// POST /api/v1/covers/generate
pub async fn generate(
    State(state): State<AppState>,
    Json(body): Json<GenerateCoverBody>,
) -> AppResult<Json<serde_json::Value>> {
    if body.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Title is required".into(),
        )));
    }

    let generator = state.cover_generator.as_ref().ok_or_else(|| {
        AppError::Core(CoreError::Configuration(
            "GOOGLE_API_KEY is not configured".into(),
        ))
    })?;

    let template = body
        .prompt_template
        .as_deref()
        .map(PromptTemplate::parse_or_default)
        .unwrap_or_default();

    let request = CoverRequest {
        title: body.title,
        category: body.category,
        summary: body.summary,
        template,
        custom_prompt: body.custom_prompt,
    };
    let image_base64 = generator.generate(&request).await?;

    if body.persist.unwrap_or(false) {
        if let Some(storage) = &state.storage {
            let bytes = base64::engine::general_purpose::STANDARD
                .decode(&image_base64)
                .map_err(|e| {
                    AppError::InternalError(format!("Provider returned invalid base64: {e}"))
                })?;
            let file = UploadFile {
                filename: format!("cover-{}.png", uuid::Uuid::new_v4()),
                content_type: "image/png".to_string(),
                bytes,
            };
            let urls = storage.upload_files(&[file]).await?;
            return Ok(Json(json!({ "url": urls[0] })));
        }
        tracing::warn!("Persistence requested but storage is not configured; returning data URI");
    }

    Ok(Json(json!({
        "url": format!("data:image/png;base64,{image_base64}"),
    })))
}
