//! Transcript entity model.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use lectern_core::types::DbId;

/// One timed span of transcript text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptSegment {
    /// Start offset in seconds.
    pub start: f64,
    /// End offset in seconds.
    pub end: f64,
    pub text: String,
}

/// A row from the `transcripts` table. At most one per lecture.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transcript {
    pub id: DbId,
    pub lecture_id: Option<DbId>,
    pub content: Option<String>,
    pub segments: Json<Vec<TranscriptSegment>>,
}
