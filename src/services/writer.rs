//! Output writing for rendered charts

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::info;

use crate::types::{HeatmapError, Result};

/// Write `content` to `path` atomically. Each call writes its own temp file
/// next to the target and renames it into place, so readers see either the
/// old or the new chart. On failure the temp file is removed and the target
/// is left untouched.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if path.file_name().is_none() {
        return Err(HeatmapError::Output(format!(
            "not a file path: {}",
            path.display()
        )));
    }
    let parent = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent)?;
            parent
        }
        None => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(parent)
        .map_err(|e| HeatmapError::Output(format!("Failed to create temp file: {}", e)))?;
    file.write_all(content.as_bytes())
        .map_err(|e| HeatmapError::Output(format!("Failed to write temp file: {}", e)))?;
    file.as_file()
        .sync_all()
        .map_err(|e| HeatmapError::Output(format!("Failed to sync temp file: {}", e)))?;

    file.persist(path)
        .map_err(|e| HeatmapError::Output(format!("Failed to rename temp file: {}", e.error)))?;

    info!(path = %path.display(), bytes = content.len(), "wrote chart");
    Ok(())
}
