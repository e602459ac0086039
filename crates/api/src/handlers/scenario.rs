//! Handlers for the `/scenarios` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use showcase_core::error::CoreError;
use showcase_core::scenario::ensure_valid_scenario;
use showcase_core::types::DbId;
use showcase_db::models::scenario::{CreateScenario, Scenario};
use showcase_db::repositories::ScenarioRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::state::AppState;

/// GET /api/scenarios
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Scenario>>> {
    let scenarios = ScenarioRepo::list(&state.pool).await?;
    Ok(Json(scenarios))
}

/// GET /api/scenarios/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Scenario>> {
    let scenario = ScenarioRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Scenario",
            id,
        }))?;
    Ok(Json(scenario))
}

/// POST /api/scenarios
///
/// Validates every required field before touching the database; an invalid
/// body is rejected with 400 and nothing is persisted.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateScenario>,
) -> AppResult<(StatusCode, Json<Scenario>)> {
    let input = input.normalized();
    ensure_valid_scenario(&input)?;

    let scenario = ScenarioRepo::create(&state.pool, &input).await?;
    tracing::info!(scenario_id = %scenario.id, title = %scenario.title, "Scenario created");
    Ok((StatusCode::CREATED, Json(scenario)))
}
