//! Slide entity model and replace-set input DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use lectern_core::types::DbId;

/// A row from the `slides` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub id: DbId,
    pub lecture_id: Option<DbId>,
    pub timestamp_seconds: i32,
    pub sort_order: i32,
    pub image_url: String,
    pub ocr_text: Option<String>,
    pub ai_summary: Option<String>,
}

/// One slide in a full-replace update. `timestamp_seconds` defaults to 0;
/// upload order within the array is preserved as `sort_order`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideInput {
    pub image_url: String,
    pub timestamp_seconds: Option<i32>,
    pub ocr_text: Option<String>,
    pub ai_summary: Option<String>,
}
