/// Background decoding of uploaded files into displayable thumbnails
use chrono::{DateTime, Utc};
use iced::widget::image::Handle;
use image::{DynamicImage, ImageFormat};
use log::debug;
use std::path::{Path, PathBuf};

use super::embedded::largest_embedded_jpeg;
use super::session::CancelToken;
use crate::error::{GalleryError, Result};

/// The decoded, displayable form of one upload
#[derive(Debug, Clone)]
pub struct Payload {
    /// File name shown in logs and error chips
    pub name: String,
    /// RGBA thumbnail ready for the image widget
    pub handle: Handle,
    /// Thumbnail dimensions
    pub width: u32,
    pub height: u32,
    /// Size of the source file in bytes
    pub source_len: u64,
    /// When decoding finished
    pub added_at: DateTime<Utc>,
}

impl Payload {
    /// Build a payload from an already decoded image, downscaled to fit
    /// a `max_edge` square. Images are never upscaled.
    pub fn from_image(name: String, img: DynamicImage, max_edge: u32, source_len: u64) -> Self {
        let img = if img.width() > max_edge || img.height() > max_edge {
            img.thumbnail(max_edge, max_edge)
        } else {
            img
        };

        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();

        Self {
            name,
            handle: Handle::from_rgba(width, height, rgba.into_raw()),
            width,
            height,
            source_len,
            added_at: Utc::now(),
        }
    }
}

/// Decode one file into a thumbnail payload
///
/// Runs on the blocking pool because decoding is CPU-bound.
pub async fn decode_file(path: PathBuf, max_edge: u32, cancel: CancelToken) -> Result<Payload> {
    tokio::task::spawn_blocking(move || decode_file_blocking(&path, max_edge, &cancel))
        .await
        .map_err(|e| GalleryError::TaskJoin(e.to_string()))?
}

/// Blocking implementation of file decoding
fn decode_file_blocking(path: &Path, max_edge: u32, cancel: &CancelToken) -> Result<Payload> {
    let bytes = std::fs::read(path).map_err(|e| GalleryError::Read {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    if cancel.is_cancelled() {
        return Err(GalleryError::Cancelled {
            path: path.to_path_buf(),
        });
    }

    let img = decode_bytes(&bytes).map_err(|reason| GalleryError::Decode {
        path: path.to_path_buf(),
        reason,
    })?;

    if cancel.is_cancelled() {
        return Err(GalleryError::Cancelled {
            path: path.to_path_buf(),
        });
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    debug!("Decoded {} ({}x{})", name, img.width(), img.height());

    Ok(Payload::from_image(name, img, max_edge, bytes.len() as u64))
}

/// Decode image bytes, falling back to the largest embedded JPEG
fn decode_bytes(bytes: &[u8]) -> std::result::Result<DynamicImage, String> {
    let direct = match image::load_from_memory(bytes) {
        Ok(img) => return Ok(img),
        Err(e) => e,
    };

    if let Some(jpeg) = largest_embedded_jpeg(bytes) {
        if let Ok(img) = image::load_from_memory_with_format(jpeg, ImageFormat::Jpeg) {
            debug!("Using {}KB embedded JPEG", jpeg.len() / 1024);
            return Ok(img);
        }
    }

    Err(direct.to_string())
}
