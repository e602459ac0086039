//! Health endpoint for the showcase server. Mounted at the root, outside
//! `/api`, so load balancers can reach it without the API prefix.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// `ok` while PostgreSQL answers, `degraded` otherwise. The server keeps
/// serving either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Ok,
    Degraded,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub db_healthy: bool,
}

impl HealthResponse {
    fn from_db_status(db_healthy: bool) -> Self {
        let status = if db_healthy {
            ServiceStatus::Ok
        } else {
            ServiceStatus::Degraded
        };
        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }
    }
}

/// GET /health
async fn report(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match showcase_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Database health check failed");
            false
        }
    };
    Json(HealthResponse::from_db_status(db_healthy))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(report))
}
