//! Comment input and validation.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::validation::{require_max_chars, require_non_blank, FieldError};

/// Maximum length of a comment body (characters).
pub const MAX_COMMENT_CHARS: usize = 2_000;

/// Maximum length of a commenter display name (characters).
pub const MAX_COMMENTER_NAME_CHARS: usize = 100;

/// Body of `POST /api/scenarios/{id}/comments`. The scenario id comes from
/// the path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommentBody {
    pub comment_text: String,
    pub commenter_name: String,
}

/// Collect every field error in `input`.
pub fn validate_comment(input: &CommentBody) -> Vec<FieldError> {
    let mut errors = Vec::new();
    require_non_blank(&mut errors, "commentText", &input.comment_text);
    require_non_blank(&mut errors, "commenterName", &input.commenter_name);
    require_max_chars(&mut errors, "commentText", &input.comment_text, MAX_COMMENT_CHARS);
    require_max_chars(
        &mut errors,
        "commenterName",
        &input.commenter_name,
        MAX_COMMENTER_NAME_CHARS,
    );
    errors
}

/// Validate `input`, returning [`CoreError::InvalidFields`] on failure.
pub fn ensure_valid_comment(input: &CommentBody) -> Result<(), CoreError> {
    CoreError::from_field_errors(validate_comment(input))
}
