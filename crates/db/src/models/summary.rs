//! Summary entity model.

use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;

use lectern_core::types::DbId;

/// A row from the `summaries` table. At most one per lecture.
///
/// `full_markdown_content` is the authoritative body; `executive_summary`
/// is a legacy field kept NULL on new writes so content is never duplicated
/// across the two.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub id: DbId,
    pub lecture_id: Option<DbId>,
    pub executive_summary: Option<String>,
    pub key_takeaways: Json<Vec<String>>,
    pub full_markdown_content: Option<String>,
    pub tags: Option<Vec<String>>,
}
