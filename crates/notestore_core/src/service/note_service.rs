//! Note use-case service.
//!
//! # Responsibility
//! - Provide list/create/read/update/delete over a `NoteRepository`.
//! - Translate repository errors into the caller-facing taxonomy.
//!
//! # Invariants
//! - `update_note` uses full content replacement semantics.
//! - Log lines carry operation metadata only, never titles or content.

use crate::model::note::{Note, NoteValidationError};
use crate::repo::note_repo::{NoteRepository, RepoError};
use crate::store::StoreError;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for note use-cases.
#[derive(Debug)]
pub enum NoteServiceError {
    /// `create` on a title that is already stored.
    AlreadyExists(String),
    /// `read`/`update`/`delete` on a title that is not stored.
    NotFound(String),
    /// Title rejected by note validation.
    InvalidTitle(NoteValidationError),
    /// Backing file unreadable, unwritable or corrupt.
    StorageUnavailable(StoreError),
}

impl NoteServiceError {
    /// Stable machine-readable code for logs and tool envelopes.
    pub fn code(&self) -> &'static str {
        match self {
            Self::AlreadyExists(_) => "already_exists",
            Self::NotFound(_) => "not_found",
            Self::InvalidTitle(_) => "invalid_title",
            Self::StorageUnavailable(_) => "storage_unavailable",
        }
    }
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyExists(title) => {
                write!(f, "a note with title '{title}' already exists")
            }
            Self::NotFound(title) => write!(f, "no note found with title '{title}'"),
            Self::InvalidTitle(err) => write!(f, "{err}"),
            Self::StorageUnavailable(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidTitle(err) => Some(err),
            Self::StorageUnavailable(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for NoteServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::AlreadyExists(title) => Self::AlreadyExists(title),
            RepoError::NotFound(title) => Self::NotFound(title),
            RepoError::Validation(err) => Self::InvalidTitle(err),
            RepoError::Store(err) => Self::StorageUnavailable(err),
        }
    }
}

pub type NoteServiceResult<T> = Result<T, NoteServiceError>;

/// Note service facade over repository implementations.
pub struct NoteService<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists every stored title. An empty store yields an empty list.
    pub fn list_notes(&self) -> NoteServiceResult<Vec<String>> {
        let result = self.repo.list_titles().map_err(NoteServiceError::from);
        match &result {
            Ok(titles) => info!(
                "event=note_list module=service status=ok notes={}",
                titles.len()
            ),
            Err(err) => log_failure("note_list", err),
        }
        result
    }

    /// Creates one note. Fails when the title is already taken.
    pub fn create_note(
        &self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> NoteServiceResult<Note> {
        let note = Note::new(title, content);
        let result = self
            .repo
            .insert_note(&note)
            .map_err(NoteServiceError::from);
        log_mutation("note_create", &note, &result);
        result.map(|()| note)
    }

    /// Returns the content stored under `title`.
    pub fn read_note(&self, title: &str) -> NoteServiceResult<String> {
        let result = match self.repo.get_note(title) {
            Ok(Some(note)) => Ok(note.content),
            Ok(None) => Err(NoteServiceError::NotFound(title.to_string())),
            Err(err) => Err(err.into()),
        };
        match &result {
            Ok(content) => info!(
                "event=note_read module=service status=ok title_len={} content_len={}",
                title.len(),
                content.len()
            ),
            Err(err) => log_failure("note_read", err),
        }
        result
    }

    /// Replaces the content of an existing note.
    pub fn update_note(
        &self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> NoteServiceResult<Note> {
        let note = Note::new(title, content);
        let result = self
            .repo
            .replace_note(&note)
            .map_err(NoteServiceError::from);
        log_mutation("note_update", &note, &result);
        result.map(|()| note)
    }

    /// Deletes an existing note.
    pub fn delete_note(&self, title: &str) -> NoteServiceResult<()> {
        let result = self
            .repo
            .remove_note(title)
            .map_err(NoteServiceError::from);
        match &result {
            Ok(()) => info!(
                "event=note_delete module=service status=ok title_len={}",
                title.len()
            ),
            Err(err) => log_failure("note_delete", err),
        }
        result
    }
}

fn log_mutation(event: &str, note: &Note, result: &NoteServiceResult<()>) {
    match result {
        Ok(()) => info!(
            "event={event} module=service status=ok title_len={} content_len={}",
            note.title.len(),
            note.content.len()
        ),
        Err(err) => log_failure(event, err),
    }
}

fn log_failure(event: &str, err: &NoteServiceError) {
    warn!(
        "event={event} module=service status=error error_code={}",
        err.code()
    );
}
