//! Route definitions for the `/settings` store.

use axum::routing::get;
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(settings::get_all).post(settings::set_many))
}
