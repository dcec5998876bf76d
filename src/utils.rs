//! Common utility functions shared across the codebase.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

/// Replaces the file at `path` with `content`.
///
/// The content goes to a temporary file in the same directory first, which
/// is then renamed over `path`. On any failure the original file is left as
/// it was. An existing file keeps its permissions.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in: {}", dir.display()))?;
    tmp.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write temporary file for: {}", path.display()))?;
    tmp.as_file()
        .sync_all()
        .with_context(|| format!("Failed to flush temporary file for: {}", path.display()))?;

    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(tmp.path(), metadata.permissions())
            .with_context(|| format!("Failed to copy permissions of: {}", path.display()))?;
    }

    tmp.persist(path)
        .with_context(|| format!("Failed to replace file: {}", path.display()))?;
    Ok(())
}
