//! Snapshot persistence for the outline tree.
//!
//! The snapshot is a plain JSON tree of `{text, editing, children}` records
//! with no versioning or migration: a full overwrite on save, a single read
//! on startup. Node ids are not part of the format; a reloaded tree gets
//! fresh ids, so identity never crosses the serialization boundary.

use crate::outline::Outline;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("snapshot io failed: {0}")]
    Io(#[from] io::Error),
    #[error("snapshot is not valid outline JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Read the snapshot at `path`. `Ok(None)` means there is nothing there yet
/// and the caller should seed a fresh outline; an unreadable or malformed
/// snapshot is an error the caller downgrades to the same fallback.
pub fn load(path: &Path) -> Result<Option<Outline>, PersistError> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path)?;
    let outline = serde_json::from_str(&contents)?;
    Ok(Some(outline))
}

/// Overwrite the snapshot at `path` with the whole tree.
pub fn save(path: &Path, outline: &Outline) -> Result<(), PersistError> {
    let json = serde_json::to_string_pretty(outline)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/persist.rs"]
mod tests;
