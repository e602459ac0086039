//! Repository for the `comments` table.

use showcase_core::types::new_id;
use sqlx::PgPool;

use crate::models::comment::{Comment, CreateComment};

const COLUMNS: &str = "id, scenario_id, comment_text, commenter_name, created_at";

/// Insert and list operations for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a comment, returning the stored row. Input must already be
    /// validated; an unknown scenario id fails with SQLSTATE 23503.
    pub async fn create(pool: &PgPool, input: &CreateComment) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (id, scenario_id, comment_text, commenter_name)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(new_id())
            .bind(&input.scenario_id)
            .bind(&input.comment_text)
            .bind(&input.commenter_name)
            .fetch_one(pool)
            .await
    }

    /// List comments for a scenario, newest first.
    pub async fn list_by_scenario(
        pool: &PgPool,
        scenario_id: &str,
    ) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM comments WHERE scenario_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(scenario_id)
            .fetch_all(pool)
            .await
    }
}
