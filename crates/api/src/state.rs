use std::sync::Arc;

use lectern_covergen::CoverGenerator;
use lectern_pipeline::PipelineHandle;
use lectern_storage::StorageClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
///
/// The gateway clients are `None` when their provider credentials are not
/// configured; the owning handlers surface that as a configuration error at
/// request time so the rest of the API keeps working.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: lectern_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Object storage client, when `S3_*` env vars are present.
    pub storage: Option<Arc<StorageClient>>,
    /// Cover-image generator, when `GOOGLE_API_KEY` is present.
    pub cover_generator: Option<Arc<CoverGenerator>>,
    /// Submission handle for the ingestion pipeline worker.
    pub pipeline: Arc<PipelineHandle>,
}
