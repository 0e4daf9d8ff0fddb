pub mod admin;
pub mod auth;
pub mod cover;
pub mod health;
pub mod lecture;
pub mod settings;
pub mod uploads;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /lectures                  GET list, POST create
/// /lectures/{id}             GET detail, PUT update, DELETE
/// /lectures/{id}/process     POST submit to pipeline
/// /settings                  GET all, POST upsert
/// /uploads                   POST multipart file batch
/// /covers/generate           POST generate cover image
/// /auth/login                POST shared-password login
/// /admin/export              GET full JSON dump
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/lectures", lecture::router())
        .nest("/settings", settings::router())
        .nest("/uploads", uploads::router())
        .nest("/covers", cover::router())
        .nest("/auth", auth::router())
        .nest("/admin", admin::router())
}
