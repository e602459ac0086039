//! Handler for recording detail-page views.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use showcase_core::types::DbId;
use showcase_db::models::scenario_view::ViewRecorded;
use showcase_db::repositories::ScenarioViewRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/scenarios/{id}/view
///
/// Appends one view event. The scenario is not looked up first: an unknown
/// id fails the foreign key and surfaces as 400.
pub async fn record(
    State(state): State<AppState>,
    Path(scenario_id): Path<DbId>,
) -> AppResult<(StatusCode, Json<ViewRecorded>)> {
    let view = ScenarioViewRepo::record(&state.pool, &scenario_id).await?;
    tracing::debug!(scenario_id = %view.scenario_id, view_id = %view.id, "View recorded");
    Ok((StatusCode::CREATED, Json(ViewRecorded { success: true })))
}
