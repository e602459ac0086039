//! Route definitions for the `/scenarios` resource, including the nested
//! view and comment routes.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{comment, scenario, view};
use crate::state::AppState;

/// Routes mounted at `/scenarios`.
///
/// ```text
/// GET    /                        -> list
/// POST   /                        -> create
/// GET    /{id}                    -> get_by_id
/// POST   /{id}/view               -> record view
/// GET    /{id}/comments           -> list_by_scenario
/// POST   /{id}/comments           -> create comment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(scenario::list).post(scenario::create))
        .route("/{id}", get(scenario::get_by_id))
        .route("/{id}/view", post(view::record))
        .route(
            "/{id}/comments",
            get(comment::list_by_scenario).post(comment::create),
        )
}
