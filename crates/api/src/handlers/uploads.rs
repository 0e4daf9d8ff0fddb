//! Handler for multipart file uploads (slide batches, PDFs, cover images).

use axum::extract::{Multipart, State};
use axum::Json;
use serde_json::json;

use lectern_core::error::CoreError;
use lectern_core::slides::sort_slide_filenames;
use lectern_storage::UploadFile;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/uploads
///
/// Accepts one or more files, sorts them into slide presentation order
/// (filename-embedded timestamps first, natural order otherwise), uploads
/// each to object storage, and returns the public URLs in that order.
/// All-or-error: a failed upload fails the whole request.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<serde_json::Value>> {
    let storage = state.storage.as_ref().ok_or_else(|| {
        AppError::Core(CoreError::Configuration(
            "Object storage is not configured (S3_* environment variables)".into(),
        ))
    })?;

    let mut files = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let filename = match field.file_name() {
            Some(name) => name.to_string(),
            // Skip non-file form fields.
            None => continue,
        };
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        files.push(UploadFile {
            filename,
            content_type,
            bytes: bytes.to_vec(),
        });
    }

    if files.is_empty() {
        return Err(AppError::BadRequest("No files uploaded".into()));
    }

    sort_slide_filenames(&mut files, |f| f.filename.as_str());

    let urls = storage.upload_files(&files).await?;
    tracing::info!(count = urls.len(), "Uploaded file batch");
    Ok(Json(json!({ "urls": urls })))
}
