/// Error types for the gallery
///
/// Errors are `Clone` because they travel inside iced messages
/// from background decode tasks back to the UI thread.

use std::path::PathBuf;
use thiserror::Error;

use crate::state::data::ImageId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    /// The file could not be read from disk
    #[error("failed to read {}: {reason}", .path.display())]
    Read { path: PathBuf, reason: String },

    /// The bytes were read but no image could be decoded from them
    #[error("failed to decode {}: {reason}", .path.display())]
    Decode { path: PathBuf, reason: String },

    /// The upload session was torn down while this file was decoding
    /// or this folder was being scanned
    #[error("upload of {} was cancelled", .path.display())]
    Cancelled { path: PathBuf },

    /// A drag referenced a position outside the gallery
    #[error("index {index} is out of bounds for a gallery of {len} images")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Selection of an image that is not in the gallery
    #[error("image {0} is not in the gallery")]
    UnknownImage(ImageId),

    /// Folder import could not walk the chosen directory
    #[error("failed to scan folder {}: {reason}", .path.display())]
    FolderScan { path: PathBuf, reason: String },

    /// Configuration file unreadable or malformed
    #[error("invalid configuration at {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },

    /// The blocking decode task panicked or was aborted
    #[error("task join error: {0}")]
    TaskJoin(String),
}

impl GalleryError {
    /// Cancellations are expected during teardown and never shown to the user
    pub fn is_cancelled(&self) -> bool {
        matches!(self, GalleryError::Cancelled { .. })
    }
}

pub type Result<T> = std::result::Result<T, GalleryError>;
