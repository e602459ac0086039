//! Image upload rules.
//!
//! Only the acceptance rules and file naming live here; the API crate owns
//! the multipart handling and the write to disk.

use crate::error::CoreError;

/// Upload size ceiling: 5 MiB.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Public URL prefix under which stored uploads are served.
pub const UPLOAD_URL_PREFIX: &str = "/uploads";

/// Extensions kept on stored file names. Anything else is stored as `.bin`.
const KNOWN_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "svg", "bmp", "avif"];

/// Reject content types that are not `image/*`.
pub fn validate_content_type(content_type: Option<&str>) -> Result<(), CoreError> {
    match content_type {
        Some(ct) if ct.trim().to_ascii_lowercase().starts_with("image/") => Ok(()),
        Some(ct) => Err(CoreError::Validation(format!(
            "Only image files are accepted (got '{ct}')"
        ))),
        None => Err(CoreError::Validation(
            "Only image files are accepted (missing content type)".into(),
        )),
    }
}

/// Reject payloads above [`MAX_UPLOAD_BYTES`]. Returns `true` when the size
/// is acceptable.
pub fn within_size_limit(len: usize) -> bool {
    len <= MAX_UPLOAD_BYTES
}

/// Build the stored file name for an upload: a fresh UUID plus the
/// lowercased original extension when it is a known image extension.
pub fn stored_file_name(original: Option<&str>) -> String {
    let ext = original
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| KNOWN_IMAGE_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or_else(|| "bin".to_string());
    format!("{}.{ext}", uuid::Uuid::new_v4())
}

/// Public URL for a stored file name.
pub fn public_url(file_name: &str) -> String {
    format!("{UPLOAD_URL_PREFIX}/{file_name}")
}
