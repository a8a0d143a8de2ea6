/// Gallery configuration
///
/// Read once at startup from a JSON file. Every field is optional;
/// missing fields fall back to the defaults below.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{GalleryError, Result};

/// Environment variable that overrides the config file location
pub const CONFIG_ENV: &str = "IMAGE_GALLERY_CONFIG";

const MIN_TILE_SIZE: f32 = 32.0;
const MIN_THUMBNAIL_SIZE: u32 = 16;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GalleryConfig {
    /// Number of grid columns
    pub columns: usize,
    /// Cells spanned (in both directions) by the first image
    pub hero_span: usize,
    /// Edge length of one grid cell in logical pixels
    pub tile_size: f32,
    /// Longest edge of decoded thumbnails in pixels
    pub thumbnail_size: u32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            columns: 5,
            hero_span: 2,
            tile_size: 160.0,
            thumbnail_size: 512,
        }
    }
}

impl GalleryConfig {
    /// Load the configuration, falling back to defaults on any problem.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };

        match Self::from_file(&path) {
            Ok(Some(config)) => {
                info!("Loaded configuration from {}", path.display());
                config
            }
            Ok(None) => Self::default(),
            Err(e) => {
                warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Get the path where the config file should be
    ///
    /// `$IMAGE_GALLERY_CONFIG` wins, otherwise:
    /// - Linux: ~/.config/image-gallery/config.json
    /// - macOS: ~/Library/Application Support/image-gallery/config.json
    /// - Windows: %APPDATA%\image-gallery\config.json
    pub fn config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }

        let mut path = dirs::config_dir()?;
        path.push("image-gallery");
        path.push("config.json");
        Some(path)
    }

    /// Read a config file. A missing file is `Ok(None)`.
    pub fn from_file(path: &Path) -> Result<Option<Self>> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(GalleryError::Config {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })
            }
        };

        Self::from_json(&json)
            .map(Some)
            .map_err(|e| GalleryError::Config {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
    }

    /// Parse from a JSON string and sanitise the values
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    /// Clamp values into ranges the grid can render
    pub fn sanitized(mut self) -> Self {
        self.columns = self.columns.max(1);
        self.hero_span = self.hero_span.clamp(1, self.columns);
        if !self.tile_size.is_finite() || self.tile_size < MIN_TILE_SIZE {
            self.tile_size = MIN_TILE_SIZE;
        }
        self.thumbnail_size = self.thumbnail_size.max(MIN_THUMBNAIL_SIZE);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = GalleryConfig::from_json("{}").unwrap();
        assert_eq!(config, GalleryConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = GalleryConfig::from_json(r#"{ "columns": 4 }"#).unwrap();
        assert_eq!(config.columns, 4);
        assert_eq!(config.hero_span, 2);
        assert_eq!(config.thumbnail_size, 512);
    }

    #[test]
    fn test_values_are_clamped() {
        let config = GalleryConfig::from_json(
            r#"{ "columns": 0, "hero_span": 3, "tile_size": 1.0, "thumbnail_size": 0 }"#,
        )
        .unwrap();

        assert_eq!(config.columns, 1);
        assert_eq!(config.hero_span, 1);
        assert_eq!(config.tile_size, 32.0);
        assert_eq!(config.thumbnail_size, 16);
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = GalleryConfig::from_file(&dir.path().join("config.json")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ columns: ").unwrap();

        let err = GalleryConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, GalleryError::Config { .. }));
    }

    #[test]
    fn test_reads_values_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "columns": 6, "tile_size": 120.0 }"#).unwrap();

        let config = GalleryConfig::from_file(&path).unwrap().unwrap();
        assert_eq!(config.columns, 6);
        assert_eq!(config.tile_size, 120.0);
    }
}
