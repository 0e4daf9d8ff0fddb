//! Repository for the `summaries` table. Writes happen inside the lecture
//! aggregate transaction; this repo covers reads.

use sqlx::PgPool;

use lectern_core::types::DbId;

use crate::models::summary::Summary;

const COLUMNS: &str =
    "id, lecture_id, executive_summary, key_takeaways, full_markdown_content, tags";

pub struct SummaryRepo;

impl SummaryRepo {
    /// Find the summary belonging to a lecture, if one exists.
    pub async fn find_by_lecture(
        pool: &PgPool,
        lecture_id: DbId,
    ) -> Result<Option<Summary>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM summaries WHERE lecture_id = $1");
        sqlx::query_as::<_, Summary>(&query)
            .bind(lecture_id)
            .fetch_optional(pool)
            .await
    }

    /// All summaries, for the admin export.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Summary>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM summaries");
        sqlx::query_as::<_, Summary>(&query).fetch_all(pool).await
    }
}
