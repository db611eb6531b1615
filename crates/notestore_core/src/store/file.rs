//! Whole-file JSON load/save.
//!
//! # Invariants
//! - `save_notes` never creates parent directories.
//! - Output is pretty-printed (two-space indent) with a trailing newline so
//!   the file stays hand-editable.

use super::{StoreError, StoreResult};
use crate::model::note::NoteMap;
use log::{debug, error, info};
use std::io::ErrorKind;
use std::path::Path;
use std::time::Instant;

/// Loads the full note collection from `path`.
///
/// # Errors
/// - `StoreError::Io` when the file exists but cannot be read.
/// - `StoreError::Corrupt` when the contents are not a `string -> string`
///   JSON object.
pub fn load_notes(path: impl AsRef<Path>) -> StoreResult<NoteMap> {
    let path = path.as_ref();
    let started_at = Instant::now();

    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(
                "event=store_load module=store status=ok mode=absent notes=0 duration_ms={}",
                started_at.elapsed().as_millis()
            );
            return Ok(NoteMap::new());
        }
        Err(err) => {
            error!(
                "event=store_load module=store status=error duration_ms={} error_code=read_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source: err,
            });
        }
    };

    if raw.trim().is_empty() {
        debug!(
            "event=store_load module=store status=ok mode=blank notes=0 duration_ms={}",
            started_at.elapsed().as_millis()
        );
        return Ok(NoteMap::new());
    }

    match serde_json::from_str::<NoteMap>(&raw) {
        Ok(notes) => {
            debug!(
                "event=store_load module=store status=ok mode=file notes={} bytes={} duration_ms={}",
                notes.len(),
                raw.len(),
                started_at.elapsed().as_millis()
            );
            Ok(notes)
        }
        Err(err) => {
            error!(
                "event=store_load module=store status=error duration_ms={} error_code=corrupt_file error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(StoreError::Corrupt {
                path: path.to_path_buf(),
                source: err,
            })
        }
    }
}

/// Rewrites `path` with the full note collection.
///
/// # Errors
/// - `StoreError::Io` when the file or its parent directory is not writable.
pub fn save_notes(path: impl AsRef<Path>, notes: &NoteMap) -> StoreResult<()> {
    let path = path.as_ref();
    let started_at = Instant::now();

    let mut encoded = serde_json::to_string_pretty(notes).map_err(StoreError::Encode)?;
    encoded.push('\n');

    match std::fs::write(path, encoded.as_bytes()) {
        Ok(()) => {
            info!(
                "event=store_save module=store status=ok notes={} bytes={} duration_ms={}",
                notes.len(),
                encoded.len(),
                started_at.elapsed().as_millis()
            );
            Ok(())
        }
        Err(err) => {
            error!(
                "event=store_save module=store status=error notes={} duration_ms={} error_code=write_failed error={}",
                notes.len(),
                started_at.elapsed().as_millis(),
                err
            );
            Err(StoreError::Io {
                path: path.to_path_buf(),
                source: err,
            })
        }
    }
}
