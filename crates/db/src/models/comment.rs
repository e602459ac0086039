//! Comment entity model and DTOs.

use serde::{Deserialize, Serialize};
use showcase_core::comment::CommentBody;
use showcase_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `comments` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: DbId,
    pub scenario_id: DbId,
    pub comment_text: String,
    pub commenter_name: String,
    pub created_at: Timestamp,
}

/// DTO for inserting a comment.
#[derive(Debug, Clone)]
pub struct CreateComment {
    pub scenario_id: DbId,
    pub comment_text: String,
    pub commenter_name: String,
}

impl CreateComment {
    /// Attach a request body to the scenario named in the URL path.
    pub fn for_scenario(scenario_id: DbId, body: CommentBody) -> Self {
        Self {
            scenario_id,
            comment_text: body.comment_text,
            commenter_name: body.commenter_name,
        }
    }
}
