//! Atomic catalogue writes.

use std::{
    fs,
    io::Write,
    path::Path,
};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

/// Replace `path` with `contents` via a temporary sibling and a rename.
///
/// A crash mid-write leaves the previous file intact. The temporary file is
/// removed if any step fails.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)
        .with_context(|| format!("Failed to create directory: {}", parent.display()))?;

    let mut temp = NamedTempFile::new_in(parent)
        .with_context(|| format!("Failed to create temporary file in: {}", parent.display()))?;
    temp.write_all(contents.as_bytes())
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    temp.as_file()
        .sync_all()
        .with_context(|| format!("Failed to sync file: {}", path.display()))?;
    temp.persist(path)
        .map_err(|err| err.error)
        .with_context(|| format!("Failed to replace file: {}", path.display()))?;
    Ok(())
}

/// Whether writing `contents` to `path` would change it.
///
/// A missing file counts as changed unless `contents` is empty.
pub fn would_change(path: &Path, contents: &str) -> bool {
    match fs::read_to_string(path) {
        Ok(existing) => existing != contents,
        Err(_) => !contents.is_empty(),
    }
}

/// Write `contents` only when it differs from what is on disk.
///
/// Returns true when the file was written.
pub fn write_if_changed(path: &Path, contents: &str) -> Result<bool> {
    if !would_change(path, contents) {
        return Ok(false);
    }
    write_atomic(path, contents)?;
    Ok(true)
}
