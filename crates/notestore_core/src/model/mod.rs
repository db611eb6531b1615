//! Domain model for the note collection.
//!
//! # Responsibility
//! - Define the `(title, content)` record exchanged by store callers.
//! - Own title validation rules applied on note creation.
//!
//! # Invariants
//! - Every note is identified by its exact, case-sensitive title.
//! - Titles are never trimmed or case-folded before storage.

pub mod note;
