//! Repository for the lecture aggregate.
//!
//! A lecture and its transcript, summary, and slide rows form one
//! consistency unit. Every multi-table operation here runs inside a single
//! transaction so a mid-sequence failure can never leave orphaned child
//! rows or a half-created lecture.

use sqlx::types::Json;
use sqlx::PgPool;

use lectern_core::error::CoreError;
use lectern_core::types::DbId;

use crate::models::lecture::{
    CreateLecture, Lecture, LectureDetail, LectureFilter, UpdateLecture, STATUS_COMPLETED,
    STATUS_PENDING,
};
use crate::repositories::{SlideRepo, SummaryRepo, TranscriptRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, source_url, video_file_url, audio_file_url, provider, \
    category, subcategory, tags, cover_image, pdf_url, publish_date, status, \
    is_published, created_at, updated_at";

/// Error type for aggregate operations: domain failures (validation,
/// missing lecture) or an underlying database error.
#[derive(Debug, thiserror::Error)]
pub enum AggregateError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Provides CRUD operations for lectures and their child records.
pub struct LectureRepo;

impl LectureRepo {
    /// Create a lecture together with its optional transcript and summary
    /// rows, in one transaction.
    ///
    /// Requires at least one of `url` / `title` to be non-empty. The title
    /// defaults to `"New Lecture"`, an empty-string URL is persisted as
    /// NULL, and the publish date defaults to now. Status is `completed`
    /// when manual content (transcript or summary text) was supplied, else
    /// `pending` for URL-only ingestion awaiting the pipeline.
    pub async fn create(pool: &PgPool, input: &CreateLecture) -> Result<Lecture, AggregateError> {
        let url = non_empty(input.url.as_deref());
        let title = non_empty(input.title.as_deref());
        if url.is_none() && title.is_none() {
            return Err(CoreError::Validation("Either url or title is required".into()).into());
        }

        let transcript = non_empty(input.transcript.as_deref());
        let summary = non_empty(input.summary.as_deref());

        // Parse before touching the database so a malformed payload writes
        // no rows at all.
        let key_takeaways: Vec<String> = match input.key_takeaways.as_deref() {
            Some(raw) => serde_json::from_str(raw).map_err(|e| {
                CoreError::Validation(format!("keyTakeaways must be a JSON string array: {e}"))
            })?,
            None => Vec::new(),
        };

        let status = if transcript.is_some() || summary.is_some() {
            STATUS_COMPLETED
        } else {
            STATUS_PENDING
        };

        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO lectures
                (title, source_url, provider, category, subcategory, tags,
                 cover_image, pdf_url, publish_date, status, is_published)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, NOW()), $10,
                     COALESCE($11, TRUE))
             RETURNING {COLUMNS}"
        );
        let lecture = sqlx::query_as::<_, Lecture>(&query)
            .bind(title.unwrap_or("New Lecture"))
            .bind(url)
            .bind(&input.provider)
            .bind(&input.category)
            .bind(&input.subcategory)
            .bind(&input.tags)
            .bind(&input.cover_image)
            .bind(&input.pdf_url)
            .bind(input.publish_date)
            .bind(status)
            .bind(input.is_published)
            .fetch_one(&mut *tx)
            .await?;

        if let Some(content) = transcript {
            sqlx::query("INSERT INTO transcripts (lecture_id, content) VALUES ($1, $2)")
                .bind(lecture.id)
                .bind(content)
                .execute(&mut *tx)
                .await?;
        }

        if let Some(content) = summary {
            // executive_summary stays NULL: full_markdown_content is the
            // authoritative body and content must not be duplicated.
            sqlx::query(
                "INSERT INTO summaries
                    (lecture_id, executive_summary, full_markdown_content, key_takeaways, tags)
                 VALUES ($1, NULL, $2, $3, $4)",
            )
            .bind(lecture.id)
            .bind(content)
            .bind(Json(&key_takeaways))
            .bind(vec![input
                .category
                .clone()
                .unwrap_or_else(|| "General".to_string())])
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        tracing::info!(lecture_id = %lecture.id, status, "Created lecture");
        Ok(lecture)
    }

    /// Find a lecture row by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Lecture>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lectures WHERE id = $1");
        sqlx::query_as::<_, Lecture>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch a lecture merged with its transcript content, summary body,
    /// and ordered slide list. Returns `None` when the lecture is absent.
    pub async fn get_detail(pool: &PgPool, id: DbId) -> Result<Option<LectureDetail>, sqlx::Error> {
        let Some(lecture) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let transcript = TranscriptRepo::find_by_lecture(pool, id)
            .await?
            .and_then(|t| t.content)
            .unwrap_or_default();
        let summary = SummaryRepo::find_by_lecture(pool, id)
            .await?
            .and_then(|s| s.full_markdown_content)
            .unwrap_or_default();
        let slides = SlideRepo::list_by_lecture(pool, id).await?;

        Ok(Some(LectureDetail {
            lecture,
            transcript,
            summary,
            slides,
        }))
    }

    /// List lectures ordered by publish date, newest first.
    ///
    /// Public callers pass `published: Some(true)`; the admin listing uses
    /// an empty filter and sees every publish state.
    pub async fn list(pool: &PgPool, filter: &LectureFilter) -> Result<Vec<Lecture>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM lectures
             WHERE ($1::boolean IS NULL OR is_published = $1)
               AND ($2::text IS NULL
                    OR title ILIKE '%' || $2 || '%'
                    OR category ILIKE '%' || $2 || '%'
                    OR subcategory ILIKE '%' || $2 || '%')
               AND ($3::text IS NULL OR category = $3)
             ORDER BY publish_date DESC NULLS LAST"
        );
        sqlx::query_as::<_, Lecture>(&query)
            .bind(filter.published)
            .bind(&filter.search)
            .bind(&filter.category)
            .fetch_all(pool)
            .await
    }

    /// Apply a partial update to a lecture and its child records in one
    /// transaction.
    ///
    /// Only non-`None` lecture fields are applied. A present `transcript` /
    /// `summary` updates the existing child row in place, or inserts one
    /// lazily when the new value is non-empty. A present `slides` array
    /// fully replaces the slide set.
    ///
    /// Fails with [`CoreError::NotFound`] when the lecture does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLecture,
    ) -> Result<(), AggregateError> {
        let mut tx = pool.begin().await?;

        let updated = sqlx::query(
            "UPDATE lectures SET
                title = COALESCE($2, title),
                provider = COALESCE($3, provider),
                category = COALESCE($4, category),
                subcategory = COALESCE($5, subcategory),
                tags = COALESCE($6, tags),
                cover_image = COALESCE($7, cover_image),
                pdf_url = COALESCE($8, pdf_url),
                publish_date = COALESCE($9, publish_date),
                is_published = COALESCE($10, is_published),
                updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.provider)
        .bind(&input.category)
        .bind(&input.subcategory)
        .bind(&input.tags)
        .bind(&input.cover_image)
        .bind(&input.pdf_url)
        .bind(input.publish_date)
        .bind(input.is_published)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if updated == 0 {
            return Err(CoreError::NotFound {
                entity: "Lecture",
                id,
            }
            .into());
        }

        if let Some(content) = input.transcript.as_deref() {
            if content.is_empty() {
                // Empty string updates an existing row but never creates one.
                sqlx::query("UPDATE transcripts SET content = $2 WHERE lecture_id = $1")
                    .bind(id)
                    .bind(content)
                    .execute(&mut *tx)
                    .await?;
            } else {
                sqlx::query(
                    "INSERT INTO transcripts (lecture_id, content) VALUES ($1, $2)
                     ON CONFLICT (lecture_id) DO UPDATE SET content = EXCLUDED.content",
                )
                .bind(id)
                .bind(content)
                .execute(&mut *tx)
                .await?;
            }
        }

        if let Some(content) = input.summary.as_deref() {
            if content.is_empty() {
                sqlx::query(
                    "UPDATE summaries SET full_markdown_content = $2 WHERE lecture_id = $1",
                )
                .bind(id)
                .bind(content)
                .execute(&mut *tx)
                .await?;
            } else {
                sqlx::query(
                    "INSERT INTO summaries
                        (lecture_id, executive_summary, full_markdown_content, tags)
                     VALUES ($1, NULL, $2, $3)
                     ON CONFLICT (lecture_id)
                     DO UPDATE SET full_markdown_content = EXCLUDED.full_markdown_content",
                )
                .bind(id)
                .bind(content)
                .bind(vec![input
                    .category
                    .clone()
                    .unwrap_or_else(|| "General".to_string())])
                .execute(&mut *tx)
                .await?;
            }
        }

        if let Some(slides) = &input.slides {
            sqlx::query("DELETE FROM slides WHERE lecture_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;

            for (index, slide) in slides.iter().enumerate() {
                sqlx::query(
                    "INSERT INTO slides
                        (lecture_id, timestamp_seconds, sort_order, image_url, ocr_text, ai_summary)
                     VALUES ($1, $2, $3, $4, $5, $6)",
                )
                .bind(id)
                .bind(slide.timestamp_seconds.unwrap_or(0))
                .bind(index as i32)
                .bind(&slide.image_url)
                .bind(&slide.ocr_text)
                .bind(&slide.ai_summary)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;
        Ok(())
    }

    /// Delete a lecture and all of its child records in one transaction.
    ///
    /// Children go first because of the foreign-key references. Idempotent:
    /// deleting a missing ID is a no-op. Returns whether a lecture row
    /// actually existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        for table in ["transcripts", "summaries", "slides"] {
            sqlx::query(&format!("DELETE FROM {table} WHERE lecture_id = $1"))
                .bind(id)
                .execute(&mut *tx)
                .await?;
        }

        let deleted = sqlx::query("DELETE FROM lectures WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;
        Ok(deleted > 0)
    }

    /// Set the processing status of a lecture. Used by the ingestion
    /// pipeline to report progress.
    pub async fn set_status(pool: &PgPool, id: DbId, status: &str) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE lectures SET status = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(pool)
            .await?;
        Ok(())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}
