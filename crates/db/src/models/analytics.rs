//! View-count aggregation models.

use serde::{Deserialize, Serialize};
use showcase_core::types::DbId;
use sqlx::FromRow;

use crate::models::scenario::Scenario;

/// Raw aggregation row: the view count plus every scenario column.
#[derive(Debug, Clone, FromRow)]
pub struct AnalyticsRow {
    pub view_count: i64,
    #[sqlx(flatten)]
    pub scenario: Scenario,
}

/// One entry of `GET /api/analytics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioAnalytics {
    pub scenario_id: DbId,
    pub view_count: i64,
    pub scenario: Scenario,
}

impl From<AnalyticsRow> for ScenarioAnalytics {
    fn from(row: AnalyticsRow) -> Self {
        Self {
            scenario_id: row.scenario.id.clone(),
            view_count: row.view_count,
            scenario: row.scenario,
        }
    }
}
