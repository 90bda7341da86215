use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ScaffoldError;

/// Walk upward from `start` (inclusive) until a directory containing `marker` is found.
pub fn find_project_root(start: &Path, marker: &str) -> Result<PathBuf, ScaffoldError> {
    for dir in start.ancestors() {
        if dir.join(marker).is_file() {
            debug!("Found {} in {}", marker, dir.display());
            return Ok(dir.to_path_buf());
        }
    }
    Err(ScaffoldError::ProjectRootNotFound {
        marker: marker.to_string(),
    })
}
