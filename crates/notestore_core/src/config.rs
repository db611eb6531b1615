//! Store configuration and backing-file path resolution.
//!
//! # Responsibility
//! - Resolve the backing file path from explicit input, environment, or
//!   platform defaults.
//! - Build a ready-to-use note service from the resolved configuration.
//!
//! # Invariants
//! - Resolution never fails; the temp directory is the last fallback.
//! - Blank environment values are ignored.

use crate::repo::note_repo::JsonFileNoteRepository;
use crate::service::note_service::NoteService;
use std::path::{Path, PathBuf};

/// Environment variable overriding the default backing file path.
pub const NOTES_PATH_ENV: &str = "NOTESTORE_PATH";
/// File name used under the home (or temp) directory.
pub const DEFAULT_NOTES_FILE_NAME: &str = "claude_notes.json";

/// Resolved store settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Location of the JSON backing file.
    pub notes_path: PathBuf,
}

impl StoreConfig {
    /// Uses `notes_path` as-is.
    pub fn new(notes_path: impl Into<PathBuf>) -> Self {
        Self {
            notes_path: notes_path.into(),
        }
    }

    /// Resolves the backing file path.
    ///
    /// Precedence: `explicit`, then `NOTESTORE_PATH`, then
    /// `<home>/claude_notes.json`, then `<temp>/claude_notes.json`.
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        let from_env = std::env::var(NOTES_PATH_ENV).ok();
        Self::resolve_with(explicit, from_env.as_deref(), dirs::home_dir().as_deref())
    }

    fn resolve_with(
        explicit: Option<PathBuf>,
        from_env: Option<&str>,
        home: Option<&Path>,
    ) -> Self {
        if let Some(path) = explicit {
            return Self::new(path);
        }
        if let Some(raw) = from_env {
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                return Self::new(trimmed);
            }
        }
        let base = home
            .map(Path::to_path_buf)
            .unwrap_or_else(std::env::temp_dir);
        Self::new(base.join(DEFAULT_NOTES_FILE_NAME))
    }

    /// Builds a note service bound to this configuration's backing file.
    pub fn open_service(&self) -> NoteService<JsonFileNoteRepository> {
        NoteService::new(JsonFileNoteRepository::new(self.notes_path.clone()))
    }
}
