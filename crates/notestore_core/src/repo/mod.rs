//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define exact-key data access contracts for the note collection.
//! - Isolate backing-file details from service orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`AlreadyExists`, `NotFound`) in
//!   addition to storage errors.
//! - A mutation is committed only once the backing file has been rewritten.

pub mod note_repo;
