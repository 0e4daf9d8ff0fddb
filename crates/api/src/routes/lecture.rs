//! Route definitions for the `/lectures` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::lecture;
use crate::state::AppState;

/// Routes mounted at `/lectures`.
///
/// ```text
/// GET    /               -> list
/// POST   /               -> create
/// GET    /{id}           -> get_by_id
/// PUT    /{id}           -> update
/// DELETE /{id}           -> delete
/// POST   /{id}/process   -> process
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(lecture::list).post(lecture::create))
        .route(
            "/{id}",
            get(lecture::get_by_id)
                .put(lecture::update)
                .delete(lecture::delete),
        )
        .route("/{id}/process", post(lecture::process))
}
