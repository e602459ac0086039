pub mod analytics;
pub mod health;
pub mod scenario;
pub mod upload;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /scenarios                                       list, create
/// /scenarios/{id}                                  get
/// /scenarios/{id}/view                             record view (POST)
/// /scenarios/{id}/comments                         list, create
///
/// /analytics                                       view counts, highest first
///
/// /upload                                          image upload (multipart POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/scenarios", scenario::router())
        .nest("/analytics", analytics::router())
        .nest("/upload", upload::router())
}
