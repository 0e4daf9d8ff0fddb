//! Repository for the `slides` table. The slide set is replaced wholesale
//! inside the lecture aggregate transaction; this repo covers reads.

use sqlx::PgPool;

use lectern_core::types::DbId;

use crate::models::slide::Slide;

const COLUMNS: &str =
    "id, lecture_id, timestamp_seconds, sort_order, image_url, ocr_text, ai_summary";

pub struct SlideRepo;

impl SlideRepo {
    /// Slides for a lecture in presentation order: explicit timestamp
    /// first, upload order as the tiebreak.
    pub async fn list_by_lecture(
        pool: &PgPool,
        lecture_id: DbId,
    ) -> Result<Vec<Slide>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM slides
             WHERE lecture_id = $1
             ORDER BY timestamp_seconds, sort_order"
        );
        sqlx::query_as::<_, Slide>(&query)
            .bind(lecture_id)
            .fetch_all(pool)
            .await
    }

    /// All slides, for the admin export.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Slide>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM slides");
        sqlx::query_as::<_, Slide>(&query).fetch_all(pool).await
    }
}
