use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lectern_api::config::ServerConfig;
use lectern_api::router::build_app_router;
use lectern_api::state::AppState;
use lectern_covergen::{CoverGenConfig, CoverGenerator};
use lectern_pipeline::PipelineHandle;
use lectern_storage::{StorageClient, StorageConfig};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lectern_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = lectern_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    lectern_db::health_check(&pool)
        .await
        .expect("Database health check failed");

    lectern_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Object storage (optional) ---
    let storage = match StorageConfig::from_env() {
        Ok(storage_config) => {
            let client = StorageClient::new(storage_config).await;
            tracing::info!("Object storage client ready");
            Some(Arc::new(client))
        }
        Err(error) => {
            tracing::warn!(%error, "Object storage not configured; uploads will fail");
            None
        }
    };

    // --- Cover generation (optional) ---
    let cover_generator = match CoverGenConfig::from_env() {
        Some(covergen_config) => {
            tracing::info!(model = %covergen_config.model, "Cover generator ready");
            Some(Arc::new(CoverGenerator::new(covergen_config)))
        }
        None => {
            tracing::warn!("GOOGLE_API_KEY not set; cover generation will fail");
            None
        }
    };

    // --- Ingestion pipeline worker ---
    let pipeline_cancel = tokio_util::sync::CancellationToken::new();
    let (pipeline, pipeline_handle) =
        PipelineHandle::start(pool.clone(), pipeline_cancel.clone());
    tracing::info!("Ingestion pipeline worker started");

    // --- App state / router ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        storage,
        cover_generator,
        pipeline,
    };
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // Let the pipeline worker drain before exit.
    pipeline_cancel.cancel();
    if let Err(error) = pipeline_handle.await {
        tracing::error!(%error, "Pipeline worker did not shut down cleanly");
    }
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
