//! Scenario entity model.

use serde::{Deserialize, Serialize};
use showcase_core::types::{DbId, Timestamp};
use sqlx::FromRow;

pub use showcase_core::scenario::CreateScenario;

/// A row from the `scenarios` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub business_problem: String,
    pub solution: String,
    pub technical_details: String,
    pub impact: String,
    pub category: String,
    pub image_url: String,
    pub team: String,
    pub timeline: String,
    pub metrics: Vec<String>,
    pub owner_name: String,
    pub owner_avatar_url: Option<String>,
    pub requirement_doc_url: Option<String>,
    pub github_repo_url: Option<String>,
    pub demo_manual_url: Option<String>,
    pub install_guide_url: Option<String>,
    pub created_at: Timestamp,
}
