//! Route definitions for image upload.

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;
use showcase_core::upload::MAX_UPLOAD_BYTES;

use crate::handlers::upload;
use crate::state::AppState;

/// Body limit for the upload route. Twice the image ceiling, so slightly
/// oversized images reach the handler and get a descriptive 413.
const UPLOAD_BODY_LIMIT: usize = MAX_UPLOAD_BYTES * 2;

/// Routes mounted at `/upload`.
///
/// ```text
/// POST   /                        -> upload_image
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(upload::upload_image))
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT))
}
