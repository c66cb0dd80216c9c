//! BLAKE3 fingerprint of an output tree.

use crate::error::CompileError;
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    /// Relative to the walked root
    pub path: PathBuf,
    pub bytes: u64,
    pub digest: String,
}

/// Walk `root` in file-name order and hash every regular file.
///
/// A missing root yields an empty manifest.
pub fn collect_manifest(root: &Path) -> Result<Vec<ManifestEntry>, CompileError> {
    if !root.exists() {
        return Ok(Vec::new());
    }

    let mut entries = Vec::new();
    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            CompileError::read(path, e.into())
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let contents = std::fs::read(entry.path()).map_err(|e| CompileError::read(entry.path(), e))?;
        let relative = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .to_path_buf();
        entries.push(ManifestEntry {
            path: relative,
            bytes: contents.len() as u64,
            digest: hex::encode(blake3::hash(&contents).as_bytes()),
        });
    }
    Ok(entries)
}
