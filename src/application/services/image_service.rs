//! Image ingestion: stores an upload as a JPEG plus a thumbnail.

use chrono::Utc;
use image::{DynamicImage, ExtendedColorType, codecs::jpeg::JpegEncoder, imageops::FilterType};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::repositories::FileStorage;
use crate::utils::filename::stored_file_name;

pub const IMAGES_DIR: &str = "images";
pub const THUMBNAILS_DIR: &str = "thumbnails";
pub const THUMBNAIL_WIDTH: u32 = 200;
const JPEG_QUALITY: u8 = 90;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("failed to encode image: {0}")]
    Encode(#[source] image::ImageError),

    #[error("image worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

/// Outcome of an ingestion. Paths are storage-relative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageUpload {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_path: Option<String>,
}

impl ImageUpload {
    fn failed() -> Self {
        Self {
            success: false,
            image_path: None,
            thumbnail_path: None,
        }
    }
}

pub struct ImageService<S: FileStorage> {
    storage: Arc<S>,
}

impl<S: FileStorage> ImageService<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Stores `bytes` under `images/` and a 200px wide thumbnail under
    /// `thumbnails/`, both named after `original_name`.
    ///
    /// A failed write is reported as `success: false` rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::Decode`] if `bytes` is not a supported image.
    /// Returns [`ImageError::Encode`] if JPEG encoding fails.
    /// Returns [`ImageError::Worker`] if the blocking transcode task panics.
    pub async fn store_image(
        &self,
        bytes: &[u8],
        original_name: &str,
    ) -> Result<ImageUpload, ImageError> {
        self.store_image_at(bytes, original_name, Utc::now().timestamp())
            .await
    }

    async fn store_image_at(
        &self,
        bytes: &[u8],
        original_name: &str,
        timestamp: i64,
    ) -> Result<ImageUpload, ImageError> {
        let owned = bytes.to_vec();
        let (full, thumbnail) = tokio::task::spawn_blocking(move || transcode(&owned)).await??;

        let name = stored_file_name(original_name, timestamp);
        let image_path = format!("{IMAGES_DIR}/{name}");
        let thumbnail_path = format!("{THUMBNAILS_DIR}/{name}");

        let image_written = self.write(&image_path, full).await;
        let thumbnail_written = self.write(&thumbnail_path, thumbnail).await;

        if !(image_written && thumbnail_written) {
            return Ok(ImageUpload::failed());
        }

        tracing::info!(image = %image_path, thumbnail = %thumbnail_path, "Image stored");

        Ok(ImageUpload {
            success: true,
            image_path: Some(image_path),
            thumbnail_path: Some(thumbnail_path),
        })
    }

    async fn write(&self, path: &str, contents: Vec<u8>) -> bool {
        match self.storage.put(path, contents).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(path, error = %e, "Image write failed");
                false
            }
        }
    }
}

/// Decodes `bytes` and returns the full-size JPEG and its thumbnail.
/// CPU bound; runs on the blocking pool.
fn transcode(bytes: &[u8]) -> Result<(Vec<u8>, Vec<u8>), ImageError> {
    let image = image::load_from_memory(bytes).map_err(ImageError::Decode)?;

    let full = encode_jpeg(&image)?;
    let thumbnail = encode_jpeg(&thumbnail_of(&image))?;

    Ok((full, thumbnail))
}

/// Scales to [`THUMBNAIL_WIDTH`], keeping the aspect ratio.
fn thumbnail_of(image: &DynamicImage) -> DynamicImage {
    let (width, height) = (image.width().max(1), image.height());
    let scaled = (u64::from(height) * u64::from(THUMBNAIL_WIDTH) + u64::from(width) / 2)
        / u64::from(width);
    let thumb_height = u32::try_from(scaled).unwrap_or(u32::MAX).max(1);

    image.resize_exact(THUMBNAIL_WIDTH, thumb_height, FilterType::Triangle)
}

fn encode_jpeg(image: &DynamicImage) -> Result<Vec<u8>, ImageError> {
    let rgb = image.to_rgb8();
    let mut out = Vec::new();

    JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY)
        .encode(rgb.as_raw(), rgb.width(), rgb.height(), ExtendedColorType::Rgb8)
        .map_err(ImageError::Encode)?;

    Ok(out)
}
