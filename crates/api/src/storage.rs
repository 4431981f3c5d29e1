//! Local filesystem storage for uploaded airport images.
//!
//! Files are written beneath the configured media root; the database only
//! stores the path relative to that root.

use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::error::AppError;

/// Image formats accepted for upload.
const ACCEPTED_FORMATS: &[ImageFormat] = &[ImageFormat::Png, ImageFormat::Jpeg, ImageFormat::WebP];

/// Writes image bytes beneath a media root directory.
#[derive(Debug, Clone)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Sniff the image format from its magic bytes and return the file
    /// extension to store it under.
    ///
    /// The client-supplied filename and content type are not trusted.
    pub fn detect_extension(data: &[u8]) -> Result<&'static str, AppError> {
        let format = image::guess_format(data)
            .map_err(|_| AppError::BadRequest("Uploaded file is not a recognised image".into()))?;

        if !ACCEPTED_FORMATS.contains(&format) {
            return Err(AppError::BadRequest(format!(
                "Unsupported image format {format:?}. Supported: png, jpeg, webp"
            )));
        }

        format
            .extensions_str()
            .first()
            .copied()
            .ok_or_else(|| AppError::InternalError(format!("No extension known for {format:?}")))
    }

    /// Write `data` to `relative_path` under the media root, creating parent
    /// directories as needed.
    pub async fn save(&self, relative_path: &str, data: &[u8]) -> Result<PathBuf, AppError> {
        let full_path = self.root.join(relative_path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                AppError::InternalError(format!("Failed to create media directory: {e}"))
            })?;
        }

        tokio::fs::write(&full_path, data)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to write image: {e}")))?;

        tracing::debug!(path = %full_path.display(), bytes = data.len(), "Stored image");
        Ok(full_path)
    }
}
