//! View event model.

use serde::{Deserialize, Serialize};
use showcase_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `scenario_views` table. One per detail-page visit.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioView {
    pub id: DbId,
    pub scenario_id: DbId,
    pub viewed_at: Timestamp,
}

/// Acknowledgement returned by `POST /api/scenarios/{id}/view`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewRecorded {
    pub success: bool,
}
