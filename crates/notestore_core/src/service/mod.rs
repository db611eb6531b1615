//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the five note operations.
//! - Keep the tool surface and CLI decoupled from storage details.

pub mod note_service;
