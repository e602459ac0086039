//! Handler for view analytics.

use axum::extract::State;
use axum::Json;
use showcase_db::models::analytics::ScenarioAnalytics;
use showcase_db::repositories::ScenarioViewRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/analytics
///
/// View counts per viewed scenario, highest first. Scenarios without views
/// are not listed.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ScenarioAnalytics>>> {
    let analytics = ScenarioViewRepo::analytics(&state.pool).await?;
    Ok(Json(analytics))
}
