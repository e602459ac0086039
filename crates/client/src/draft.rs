//! Form drafts for the comment box and the scenario submission form.
//!
//! A draft is only cleared after the server accepts it. A failed submission
//! leaves every field in place so the user can correct and retry.

use showcase_core::comment::{validate_comment, CommentBody};
use showcase_core::scenario::{validate_scenario, CreateScenario};
use showcase_core::validation::FieldError;
use showcase_db::models::comment::Comment;
use showcase_db::models::scenario::Scenario;

use crate::api::ShowcaseClient;
use crate::error::ClientError;

/// Pending comment for one scenario detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentDraft {
    pub body: CommentBody,
}

impl CommentDraft {
    pub fn new(commenter_name: impl Into<String>, comment_text: impl Into<String>) -> Self {
        Self {
            body: CommentBody {
                comment_text: comment_text.into(),
                commenter_name: commenter_name.into(),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.body == CommentBody::default()
    }

    /// Field errors to show inline before submitting.
    pub fn field_errors(&self) -> Vec<FieldError> {
        validate_comment(&self.body)
    }

    /// Post the draft. Cleared on success, untouched on failure.
    pub async fn submit(
        &mut self,
        client: &ShowcaseClient,
        scenario_id: &str,
    ) -> Result<Comment, ClientError> {
        let result = client.create_comment(scenario_id, &self.body).await;
        settle(&mut self.body, &result);
        result
    }
}

/// Pending scenario on the submission form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScenarioDraft {
    pub input: CreateScenario,
}

impl ScenarioDraft {
    pub fn is_empty(&self) -> bool {
        self.input == CreateScenario::default()
    }

    pub fn field_errors(&self) -> Vec<FieldError> {
        validate_scenario(&self.input.clone().normalized())
    }

    /// Post the draft. Cleared on success, untouched on failure.
    pub async fn submit(&mut self, client: &ShowcaseClient) -> Result<Scenario, ClientError> {
        let result = client.create_scenario(&self.input).await;
        settle(&mut self.input, &result);
        result
    }
}

fn settle<D: Default, T, E>(draft: &mut D, result: &Result<T, E>) {
    if result.is_ok() {
        *draft = D::default();
    }
}
