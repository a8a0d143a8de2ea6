/// Folder import: collect every file under a directory for decoding
use log::{debug, info, warn};
use std::path::PathBuf;
use walkdir::WalkDir;

use super::session::CancelToken;
use crate::error::{GalleryError, Result};

/// Collect all files under `folder`, recursively, sorted by path.
///
/// There is no extension filter: every file is handed to the decoder,
/// and the ones that aren't images surface as decode errors. The walk
/// stops with `Cancelled` as soon as `cancel` fires.
pub async fn scan_folder(folder: PathBuf, cancel: CancelToken) -> Result<Vec<PathBuf>> {
    tokio::task::spawn_blocking(move || scan_folder_blocking(folder, &cancel))
        .await
        .map_err(|e| GalleryError::TaskJoin(e.to_string()))?
}

fn scan_folder_blocking(folder: PathBuf, cancel: &CancelToken) -> Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        return Err(GalleryError::FolderScan {
            path: folder,
            reason: "not a directory".to_string(),
        });
    }

    info!("Scanning folder: {}", folder.display());

    let mut files = Vec::new();
    for entry in WalkDir::new(&folder).follow_links(true) {
        if cancel.is_cancelled() {
            debug!("Stopped scanning {} after {} files", folder.display(), files.len());
            return Err(GalleryError::Cancelled { path: folder });
        }

        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    files.sort();
    debug!("Found {} files in {}", files.len(), folder.display());
    Ok(files)
}
