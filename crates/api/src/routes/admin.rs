//! Route definitions for admin utilities.

use axum::routing::get;
use axum::Router;

use crate::handlers::export;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/export", get(export::export))
}
