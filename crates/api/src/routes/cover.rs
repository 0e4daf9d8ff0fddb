//! Route definition for cover-image generation.

use axum::routing::post;
use axum::Router;

use crate::handlers::cover;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/generate", post(cover::generate))
}
