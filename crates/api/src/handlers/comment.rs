//! Handlers for comments nested under a scenario:
//! `/scenarios/{scenario_id}/comments`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use showcase_core::comment::{ensure_valid_comment, CommentBody};
use showcase_core::types::DbId;
use showcase_db::models::comment::{Comment, CreateComment};
use showcase_db::repositories::CommentRepo;

use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::state::AppState;

/// GET /api/scenarios/{scenario_id}/comments
pub async fn list_by_scenario(
    State(state): State<AppState>,
    Path(scenario_id): Path<DbId>,
) -> AppResult<Json<Vec<Comment>>> {
    let comments = CommentRepo::list_by_scenario(&state.pool, &scenario_id).await?;
    Ok(Json(comments))
}

/// POST /api/scenarios/{scenario_id}/comments
pub async fn create(
    State(state): State<AppState>,
    Path(scenario_id): Path<DbId>,
    ApiJson(body): ApiJson<CommentBody>,
) -> AppResult<(StatusCode, Json<Comment>)> {
    ensure_valid_comment(&body)?;

    let input = CreateComment::for_scenario(scenario_id, body);
    let comment = CommentRepo::create(&state.pool, &input).await?;
    tracing::info!(
        scenario_id = %comment.scenario_id,
        comment_id = %comment.id,
        "Comment created"
    );
    Ok((StatusCode::CREATED, Json(comment)))
}
