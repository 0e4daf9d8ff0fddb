//! Lecture entity model and DTOs.
//!
//! The JSON wire format uses camelCase field names; clients were built
//! against that contract.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use lectern_core::types::{DbId, Timestamp};

use crate::models::slide::{Slide, SlideInput};

/// Processing state of an ingested lecture.
pub const STATUS_PENDING: &str = "pending";
pub const STATUS_PROCESSING: &str = "processing";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_FAILED: &str = "failed";

/// A row from the `lectures` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lecture {
    pub id: DbId,
    pub title: String,
    pub source_url: Option<String>,
    pub video_file_url: Option<String>,
    pub audio_file_url: Option<String>,
    pub provider: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub tags: Option<Vec<String>>,
    pub cover_image: Option<String>,
    pub pdf_url: Option<String>,
    pub publish_date: Option<Timestamp>,
    pub status: String,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for the aggregate create operation.
///
/// At least one of `url` / `title` must be non-empty. `key_takeaways` is a
/// JSON-encoded string array as submitted by the admin form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLecture {
    pub url: Option<String>,
    pub title: Option<String>,
    pub provider: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub tags: Option<Vec<String>>,
    pub cover_image: Option<String>,
    pub pdf_url: Option<String>,
    pub publish_date: Option<Timestamp>,
    pub is_published: Option<bool>,
    pub transcript: Option<String>,
    pub summary: Option<String>,
    pub key_takeaways: Option<String>,
}

/// DTO for the aggregate update operation. Only present fields are applied;
/// a present `slides` array always fully replaces the existing slide set.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLecture {
    pub title: Option<String>,
    pub provider: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub tags: Option<Vec<String>>,
    pub cover_image: Option<String>,
    pub pdf_url: Option<String>,
    pub publish_date: Option<Timestamp>,
    pub is_published: Option<bool>,
    pub transcript: Option<String>,
    pub summary: Option<String>,
    pub slides: Option<Vec<SlideInput>>,
}

/// A lecture merged with its child records, as returned by the detail fetch.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LectureDetail {
    #[serde(flatten)]
    pub lecture: Lecture,
    /// Transcript content, empty string when no transcript row exists.
    pub transcript: String,
    /// Summary `full_markdown_content`, empty string when no summary row exists.
    pub summary: String,
    /// Slides ordered by timestamp, then upload order.
    pub slides: Vec<Slide>,
}

/// Listing filter. `None` fields apply no constraint (admin listing).
#[derive(Debug, Clone, Default)]
pub struct LectureFilter {
    /// Restrict to a publish state (`Some(true)` for public callers).
    pub published: Option<bool>,
    /// Case-insensitive contains on title, category, or subcategory.
    pub search: Option<String>,
    /// Exact category match (case-sensitive; category is free text).
    pub category: Option<String>,
}
