//! Repository for the `scenario_views` table and the view analytics built
//! on it.

use showcase_core::types::new_id;
use sqlx::PgPool;

use crate::models::analytics::{AnalyticsRow, ScenarioAnalytics};
use crate::models::scenario_view::ScenarioView;
use crate::repositories::scenario_repo::qualified_columns;

const COLUMNS: &str = "id, scenario_id, viewed_at";

/// Appends view events and aggregates them.
pub struct ScenarioViewRepo;

impl ScenarioViewRepo {
    /// Append one view event for `scenario_id`, stamped with the server time.
    ///
    /// Fails with a foreign-key violation (SQLSTATE 23503) when the scenario
    /// does not exist.
    pub async fn record(pool: &PgPool, scenario_id: &str) -> Result<ScenarioView, sqlx::Error> {
        let query = format!(
            "INSERT INTO scenario_views (id, scenario_id) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ScenarioView>(&query)
            .bind(new_id())
            .bind(scenario_id)
            .fetch_one(pool)
            .await
    }

    /// Per-scenario view counts, highest first.
    ///
    /// This is an inner join over view events: scenarios that were never
    /// viewed do not appear. Equal counts are ordered by scenario id.
    pub async fn analytics(pool: &PgPool) -> Result<Vec<ScenarioAnalytics>, sqlx::Error> {
        let query = format!(
            "SELECT COUNT(v.id) AS view_count, {}
             FROM scenario_views v
             INNER JOIN scenarios s ON s.id = v.scenario_id
             GROUP BY s.id
             ORDER BY view_count DESC, s.id ASC",
            qualified_columns("s")
        );
        let rows = sqlx::query_as::<_, AnalyticsRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(ScenarioAnalytics::from).collect())
    }
}
