//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record and the persisted collection shape.
//! - Validate titles before a new note enters the collection.
//!
//! # Invariants
//! - `title` is non-empty and not whitespace-only once validated.
//! - `content` is arbitrary text; no length or format rules apply.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Persisted collection shape: title -> content.
///
/// Sorted map, so listings come back in ascending title order.
pub type NoteMap = BTreeMap<String, String>;

/// One stored note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique, case-sensitive key.
    pub title: String,
    /// Full note body. Replaced wholesale on update.
    pub content: String,
}

/// Validation failures for note input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteValidationError {
    /// Title is empty or contains only whitespace.
    EmptyTitle,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "note title cannot be empty"),
        }
    }
}

impl Error for NoteValidationError {}

impl Note {
    /// Creates a note record without validating it.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Validates the note for insertion into the collection.
    ///
    /// # Errors
    /// - Returns `EmptyTitle` when the title has no visible characters.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        validate_title(self.title.as_str())
    }
}

/// Checks that a title can serve as a collection key.
pub fn validate_title(title: &str) -> Result<(), NoteValidationError> {
    if title.trim().is_empty() {
        return Err(NoteValidationError::EmptyTitle);
    }
    Ok(())
}
