//! Backing-file storage for the note collection.
//!
//! # Responsibility
//! - Read the whole collection from one JSON file.
//! - Rewrite the whole collection to that file after a mutation.
//!
//! # Invariants
//! - An absent or blank file is an empty collection.
//! - A file that does not decode to a `string -> string` map is an error and
//!   is never silently replaced.
//! - Writes are full rewrites; there is no partial-write protection.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod file;

pub use file::{load_notes, save_notes};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    /// Backing file could not be read or written.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Backing file exists but holds something other than a note map.
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// In-memory collection could not be encoded.
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "notes file `{}` is unavailable: {source}", path.display())
            }
            Self::Corrupt { path, source } => write!(
                f,
                "notes file `{}` is not a valid note collection: {source}",
                path.display()
            ),
            Self::Encode(err) => write!(f, "failed to encode notes: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Corrupt { source, .. } => Some(source),
            Self::Encode(err) => Some(err),
        }
    }
}
