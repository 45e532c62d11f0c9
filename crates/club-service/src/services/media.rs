//! Media store - writes uploaded images to the local upload directory
//!
//! Filenames are deterministic (`<kind>/<stem>.<ext>`), so replacing an
//! image overwrites the previous file instead of accumulating orphans.
//! Files land under the configured root and are served statically by the
//! API crate under /uploads.

use std::path::PathBuf;

use tracing::{info, instrument};

use super::error::{ServiceError, ServiceResult};

/// Public URL prefix for stored files
const PUBLIC_PREFIX: &str = "/uploads";

/// Fallback extension when the upload carries none
const DEFAULT_EXT: &str = "png";

/// Local filesystem store for uploaded images
#[derive(Debug)]
pub struct MediaStore {
    root: PathBuf,
    max_bytes: usize,
}

impl MediaStore {
    /// Create a store rooted at the given directory
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, max_file_size_mb: u32) -> Self {
        Self {
            root: root.into(),
            max_bytes: max_file_size_mb as usize * 1024 * 1024,
        }
    }

    /// Write an uploaded image and return its public path
    ///
    /// # Errors
    /// Rejects empty and oversized uploads; filesystem failures surface as
    /// internal errors.
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn store(
        &self,
        kind: &str,
        stem: &str,
        original_filename: Option<&str>,
        bytes: &[u8],
    ) -> ServiceResult<String> {
        if bytes.is_empty() {
            return Err(ServiceError::validation("No image uploaded"));
        }
        if bytes.len() > self.max_bytes {
            return Err(ServiceError::validation(format!(
                "Image exceeds the {} MB limit",
                self.max_bytes / (1024 * 1024)
            )));
        }

        let ext = original_filename
            .and_then(sanitized_extension)
            .unwrap_or_else(|| DEFAULT_EXT.to_string());
        let file_name = format!("{stem}.{ext}");

        let dir = self.root.join(kind);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| ServiceError::internal(format!("Failed to create upload dir: {e}")))?;

        let path = dir.join(&file_name);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| ServiceError::internal(format!("Failed to write upload: {e}")))?;

        info!(path = %path.display(), "Stored uploaded image");

        Ok(format!("{PUBLIC_PREFIX}/{kind}/{file_name}"))
    }
}

/// Extract a safe lowercase extension from an uploaded filename
fn sanitized_extension(filename: &str) -> Option<String> {
    let ext = filename.rsplit_once('.')?.1;
    if ext.is_empty() || ext.len() > 5 || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}
