//! Note repository contract and JSON-file implementation.
//!
//! # Responsibility
//! - Provide exact-title CRUD over the backing file.
//! - Reload the file on every call so it stays the single source of truth.
//!
//! # Invariants
//! - Write paths run `Note::validate()` before touching the file.
//! - A failed save surfaces as an error; the loaded map is dropped, so the
//!   mutation never becomes visible.

use crate::model::note::{Note, NoteMap, NoteValidationError};
use crate::store::{load_notes, save_notes, StoreError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for note persistence and lookup.
#[derive(Debug)]
pub enum RepoError {
    Validation(NoteValidationError),
    Store(StoreError),
    AlreadyExists(String),
    NotFound(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::AlreadyExists(title) => write!(f, "note already exists: `{title}`"),
            Self::NotFound(title) => write!(f, "note not found: `{title}`"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::AlreadyExists(_) => None,
            Self::NotFound(_) => None,
        }
    }
}

impl From<NoteValidationError> for RepoError {
    fn from(value: NoteValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Repository interface for note CRUD operations.
pub trait NoteRepository {
    /// Returns every stored title in collection order.
    fn list_titles(&self) -> RepoResult<Vec<String>>;
    /// Gets one note by exact title.
    fn get_note(&self, title: &str) -> RepoResult<Option<Note>>;
    /// Inserts a new note; fails when the title is taken.
    fn insert_note(&self, note: &Note) -> RepoResult<()>;
    /// Replaces the content of an existing note wholesale.
    fn replace_note(&self, note: &Note) -> RepoResult<()>;
    /// Removes an existing note.
    fn remove_note(&self, title: &str) -> RepoResult<()>;
}

/// Backing-file repository. Holds only the path; state lives on disk.
#[derive(Debug, Clone)]
pub struct JsonFileNoteRepository {
    path: PathBuf,
}

impl JsonFileNoteRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> RepoResult<NoteMap> {
        Ok(load_notes(&self.path)?)
    }

    fn save(&self, notes: &NoteMap) -> RepoResult<()> {
        Ok(save_notes(&self.path, notes)?)
    }
}

impl NoteRepository for JsonFileNoteRepository {
    fn list_titles(&self) -> RepoResult<Vec<String>> {
        Ok(self.load()?.into_keys().collect())
    }

    fn get_note(&self, title: &str) -> RepoResult<Option<Note>> {
        let mut notes = self.load()?;
        Ok(notes
            .remove(title)
            .map(|content| Note::new(title, content)))
    }

    fn insert_note(&self, note: &Note) -> RepoResult<()> {
        note.validate()?;

        let mut notes = self.load()?;
        if notes.contains_key(note.title.as_str()) {
            return Err(RepoError::AlreadyExists(note.title.clone()));
        }
        notes.insert(note.title.clone(), note.content.clone());
        self.save(&notes)
    }

    fn replace_note(&self, note: &Note) -> RepoResult<()> {
        let mut notes = self.load()?;
        match notes.get_mut(note.title.as_str()) {
            Some(content) => *content = note.content.clone(),
            None => return Err(RepoError::NotFound(note.title.clone())),
        }
        self.save(&notes)
    }

    fn remove_note(&self, title: &str) -> RepoResult<()> {
        let mut notes = self.load()?;
        if notes.remove(title).is_none() {
            return Err(RepoError::NotFound(title.to_string()));
        }
        self.save(&notes)
    }
}
