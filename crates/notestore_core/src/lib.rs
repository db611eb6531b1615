//! Core domain logic for notestore.
//! A persistent title -> content note store backed by one JSON file.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;
pub mod tools;

pub use config::{StoreConfig, NOTES_PATH_ENV};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::note::{Note, NoteMap, NoteValidationError};
pub use repo::note_repo::{JsonFileNoteRepository, NoteRepository, RepoError, RepoResult};
pub use service::note_service::{NoteService, NoteServiceError, NoteServiceResult};
pub use store::{load_notes, save_notes, StoreError, StoreResult};
pub use tools::{dispatch, tool_definitions, ToolDefinition, ToolName, ToolOutcome};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
