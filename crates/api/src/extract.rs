//! Request extractors with project-specific rejections.

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body extractor whose rejections (bad syntax, wrong types, missing
/// content type) become 400 [`AppError::BadRequest`] responses instead of
/// axum's default 415/422.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
