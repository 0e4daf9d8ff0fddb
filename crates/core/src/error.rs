use crate::types::DbId;

/// Domain-level error taxonomy shared by all crates.
///
/// The API layer maps these onto HTTP statuses: `Validation` → 400,
/// `NotFound` → 404, `Unauthorized` → 401, everything else → 500.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// A required credential or endpoint is missing from the environment.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An upstream provider (image generation, object storage) failed.
    /// Carries the upstream HTTP status when one was received.
    #[error("External service error{}: {message}", status.map(|s| format!(" ({s})")).unwrap_or_default())]
    ExternalService {
        status: Option<u16>,
        message: String,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}
