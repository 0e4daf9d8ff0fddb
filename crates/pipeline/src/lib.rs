//! Lecture ingestion pipeline.
//!
//! A queued worker that takes URL-ingested lectures through the
//! transcribe → analyze-slides → summarize sequence and maintains the
//! lecture `status` field (`processing` → `completed` / `failed`).
//! Submission is explicit via [`PipelineHandle::submit`]; callers poll the
//! lecture record for the outcome rather than awaiting the run.
//!
//! The model steps are stubs with fixed delays and canned output; the
//! queue, status reporting, and failure paths are the real contract that
//! model integrations slot into later.

use std::sync::Arc;
use std::time::Duration;

use sqlx::types::Json;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use lectern_core::types::DbId;
use lectern_db::models::lecture::{STATUS_COMPLETED, STATUS_FAILED, STATUS_PROCESSING};
use lectern_db::models::transcript::TranscriptSegment;
use lectern_db::repositories::LectureRepo;
use lectern_db::DbPool;

const QUEUE_CAPACITY: usize = 64;
const DEFAULT_STEP_DELAY: Duration = Duration::from_secs(2);

/// Submitting a lecture to the pipeline failed.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("Pipeline queue is full")]
    QueueFull,

    #[error("Pipeline worker has stopped")]
    WorkerStopped,
}

/// Handle for submitting lectures to the ingestion worker.
pub struct PipelineHandle {
    tx: mpsc::Sender<DbId>,
}

impl PipelineHandle {
    /// Spawn the worker task and return a submission handle plus the task's
    /// join handle. The worker drains its queue until `cancel` fires.
    pub fn start(pool: DbPool, cancel: CancellationToken) -> (Arc<Self>, JoinHandle<()>) {
        Self::start_with_delay(pool, cancel, DEFAULT_STEP_DELAY)
    }

    /// As [`start`](Self::start), with a configurable per-step delay
    /// (tests use zero).
    pub fn start_with_delay(
        pool: DbPool,
        cancel: CancellationToken,
        step_delay: Duration,
    ) -> (Arc<Self>, JoinHandle<()>) {
        let (tx, rx) = mpsc::channel(QUEUE_CAPACITY);
        let handle = tokio::spawn(run_worker(pool, rx, cancel, step_delay));
        (Arc::new(Self { tx }), handle)
    }

    /// Enqueue a lecture for processing. Returns immediately; progress is
    /// observable through the lecture's `status` field.
    pub fn submit(&self, lecture_id: DbId) -> Result<(), SubmitError> {
        self.tx.try_send(lecture_id).map_err(|e| match e {
            mpsc::error::TrySendError::Full(_) => SubmitError::QueueFull,
            mpsc::error::TrySendError::Closed(_) => SubmitError::WorkerStopped,
        })
    }
}

async fn run_worker(
    pool: DbPool,
    mut rx: mpsc::Receiver<DbId>,
    cancel: CancellationToken,
    step_delay: Duration,
) {
    tracing::info!("Ingestion pipeline worker started");
    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Ingestion pipeline worker stopping");
                break;
            }
            next = rx.recv() => {
                let Some(lecture_id) = next else { break };
                if let Err(error) = process_lecture(&pool, lecture_id, step_delay).await {
                    tracing::error!(%lecture_id, %error, "Lecture ingestion failed");
                    if let Err(error) =
                        LectureRepo::set_status(&pool, lecture_id, STATUS_FAILED).await
                    {
                        tracing::error!(%lecture_id, %error, "Failed to record failed status");
                    }
                }
            }
        }
    }
}

/// Run the full ingestion sequence for one lecture.
///
/// Each step writes its result before the next starts, so a failure leaves
/// the earlier steps' output in place with the lecture marked `failed`.
pub async fn process_lecture(
    pool: &DbPool,
    lecture_id: DbId,
    step_delay: Duration,
) -> Result<(), sqlx::Error> {
    tracing::info!(%lecture_id, "Starting ingestion");
    LectureRepo::set_status(pool, lecture_id, STATUS_PROCESSING).await?;

    transcribe(pool, lecture_id, step_delay).await?;
    analyze_slides(pool, lecture_id, step_delay).await?;
    summarize(pool, lecture_id, step_delay).await?;

    LectureRepo::set_status(pool, lecture_id, STATUS_COMPLETED).await?;
    tracing::info!(%lecture_id, "Ingestion complete");
    Ok(())
}

/// Stub speech-to-text step.
async fn transcribe(
    pool: &DbPool,
    lecture_id: DbId,
    step_delay: Duration,
) -> Result<(), sqlx::Error> {
    tracing::debug!(%lecture_id, "Transcribing audio");
    tokio::time::sleep(step_delay).await;

    let segments = vec![TranscriptSegment {
        start: 0.0,
        end: 10.0,
        text: "Welcome to the lecture.".to_string(),
    }];
    sqlx::query(
        "INSERT INTO transcripts (lecture_id, content, segments) VALUES ($1, $2, $3)
         ON CONFLICT (lecture_id)
         DO UPDATE SET content = EXCLUDED.content, segments = EXCLUDED.segments",
    )
    .bind(lecture_id)
    .bind("This is a mock transcript of the medical lecture...")
    .bind(Json(segments))
    .execute(pool)
    .await?;
    Ok(())
}

/// Stub slide OCR/vision step.
async fn analyze_slides(
    pool: &DbPool,
    lecture_id: DbId,
    step_delay: Duration,
) -> Result<(), sqlx::Error> {
    tracing::debug!(%lecture_id, "Analyzing slides");
    tokio::time::sleep(step_delay).await;

    // Replace rather than append so a rerun leaves one slide set.
    sqlx::query("DELETE FROM slides WHERE lecture_id = $1")
        .bind(lecture_id)
        .execute(pool)
        .await?;

    sqlx::query(
        "INSERT INTO slides (lecture_id, timestamp_seconds, image_url, ocr_text, ai_summary)
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(lecture_id)
    .bind(60)
    .bind("https://example.com/slide1.jpg")
    .bind("Heart Failure Guidelines 2024")
    .bind("Slide discusses new guidelines.")
    .execute(pool)
    .await?;
    Ok(())
}

/// Stub summarization step.
async fn summarize(
    pool: &DbPool,
    lecture_id: DbId,
    step_delay: Duration,
) -> Result<(), sqlx::Error> {
    tracing::debug!(%lecture_id, "Generating summary");
    tokio::time::sleep(step_delay).await;

    let takeaways = vec!["SGLT2i for HFpEF".to_string(), "Rapid titration".to_string()];
    sqlx::query(
        "INSERT INTO summaries
            (lecture_id, executive_summary, key_takeaways, full_markdown_content)
         VALUES ($1, $2, $3, $4)
         ON CONFLICT (lecture_id)
         DO UPDATE SET executive_summary = EXCLUDED.executive_summary,
                       key_takeaways = EXCLUDED.key_takeaways,
                       full_markdown_content = EXCLUDED.full_markdown_content",
    )
    .bind(lecture_id)
    .bind("This lecture covers the 2024 Heart Failure guidelines.")
    .bind(Json(takeaways))
    .bind("# 2024 Updates\n\n## Introduction\n...")
    .execute(pool)
    .await?;
    Ok(())
}
