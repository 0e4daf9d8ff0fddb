//! Repository for the `transcripts` table.
//!
//! Writes happen inside the lecture aggregate transaction
//! ([`crate::repositories::LectureRepo`]); this repo covers reads.

use sqlx::PgPool;

use lectern_core::types::DbId;

use crate::models::transcript::Transcript;

const COLUMNS: &str = "id, lecture_id, content, segments";

pub struct TranscriptRepo;

impl TranscriptRepo {
    /// Find the transcript belonging to a lecture, if one exists.
    pub async fn find_by_lecture(
        pool: &PgPool,
        lecture_id: DbId,
    ) -> Result<Option<Transcript>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM transcripts WHERE lecture_id = $1");
        sqlx::query_as::<_, Transcript>(&query)
            .bind(lecture_id)
            .fetch_optional(pool)
            .await
    }

    /// All transcripts, for the admin export.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Transcript>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM transcripts");
        sqlx::query_as::<_, Transcript>(&query).fetch_all(pool).await
    }
}
