//! Handler for image uploads used by the scenario form.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use showcase_core::upload::{
    public_url, stored_file_name, validate_content_type, within_size_limit, MAX_UPLOAD_BYTES,
};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Multipart field carrying the image.
const IMAGE_FIELD: &str = "image";

/// Response body of a successful upload.
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Server-relative URL the stored image is served from.
    pub url: String,
}

/// POST /api/upload
///
/// Accepts a multipart form with a required `image` field. The part must
/// declare an `image/*` content type and be at most 5 MiB. The file is
/// written under the configured upload directory with a generated name.
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        validate_content_type(field.content_type())?;
        let file_name = stored_file_name(field.file_name());
        let data = field.bytes().await?;

        if !within_size_limit(data.len()) {
            return Err(AppError::PayloadTooLarge(format!(
                "Image exceeds the {} MiB limit",
                MAX_UPLOAD_BYTES / (1024 * 1024)
            )));
        }

        let dir = &state.config.upload_dir;
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;
        tokio::fs::write(dir.join(&file_name), &data)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        tracing::info!(file = %file_name, bytes = data.len(), "Image uploaded");
        return Ok(Json(UploadResponse {
            url: public_url(&file_name),
        }));
    }

    Err(AppError::BadRequest(format!(
        "Missing required '{IMAGE_FIELD}' field"
    )))
}
