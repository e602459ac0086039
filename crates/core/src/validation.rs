//! Field-level validation primitives.
//!
//! Validators in this crate are plain functions over input structs that
//! collect every problem instead of stopping at the first one, so the API
//! can report all offending fields in a single 400 response.

use serde::Serialize;

/// A single invalid input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Wire name of the field (camelCase, as the client sends it).
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Push a "required" error when `value` is empty or whitespace only.
pub fn require_non_blank(errors: &mut Vec<FieldError>, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, format!("{field} is required")));
    }
}

/// Push an error when `value` is longer than `max` characters.
pub fn require_max_chars(errors: &mut Vec<FieldError>, field: &'static str, value: &str, max: usize) {
    let len = value.chars().count();
    if len > max {
        errors.push(FieldError::new(
            field,
            format!("{field} exceeds maximum length of {max} characters (got {len})"),
        ));
    }
}

/// Push an error when a non-blank optional link is neither an absolute
/// http(s) URL nor a server-relative path.
pub fn require_link(errors: &mut Vec<FieldError>, field: &'static str, value: Option<&str>) {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return;
    };
    if !is_link(value) {
        errors.push(FieldError::new(
            field,
            format!("{field} must be an http(s) URL or an absolute path"),
        ));
    }
}

fn is_link(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://") || value.starts_with('/')
}
