//! Repository for the `scenarios` table.

use showcase_core::types::new_id;
use sqlx::PgPool;

use crate::models::scenario::{CreateScenario, Scenario};

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "id, title, description, business_problem, solution, \
     technical_details, impact, category, image_url, team, timeline, metrics, owner_name, \
     owner_avatar_url, requirement_doc_url, github_repo_url, demo_manual_url, \
     install_guide_url, created_at";

/// [`COLUMNS`] qualified with a table alias, for joins.
pub(crate) fn qualified_columns(alias: &str) -> String {
    COLUMNS
        .split(',')
        .map(|c| format!("{alias}.{}", c.trim()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Provides read and insert operations for scenarios. Scenarios are
/// immutable, so there is no update or delete.
pub struct ScenarioRepo;

impl ScenarioRepo {
    /// Insert a new scenario with a freshly generated id, returning the
    /// stored row. Input must already be validated.
    pub async fn create(pool: &PgPool, input: &CreateScenario) -> Result<Scenario, sqlx::Error> {
        let query = format!(
            "INSERT INTO scenarios (id, title, description, business_problem, solution, \
                 technical_details, impact, category, image_url, team, timeline, metrics, \
                 owner_name, owner_avatar_url, requirement_doc_url, github_repo_url, \
                 demo_manual_url, install_guide_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Scenario>(&query)
            .bind(new_id())
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.business_problem)
            .bind(&input.solution)
            .bind(&input.technical_details)
            .bind(&input.impact)
            .bind(&input.category)
            .bind(&input.image_url)
            .bind(&input.team)
            .bind(&input.timeline)
            .bind(&input.metrics)
            .bind(&input.owner_name)
            .bind(&input.owner_avatar_url)
            .bind(&input.requirement_doc_url)
            .bind(&input.github_repo_url)
            .bind(&input.demo_manual_url)
            .bind(&input.install_guide_url)
            .fetch_one(pool)
            .await
    }

    /// Find a scenario by id. The id is opaque; unknown ids yield `None`.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Scenario>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM scenarios WHERE id = $1");
        sqlx::query_as::<_, Scenario>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all scenarios in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Scenario>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM scenarios ORDER BY created_at ASC, id ASC");
        sqlx::query_as::<_, Scenario>(&query).fetch_all(pool).await
    }

    /// Count all scenarios.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM scenarios")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
