//! Named-operation surface for external agents.
//!
//! # Responsibility
//! - Publish the five note operations with their JSON input schemas.
//! - Dispatch one named call with JSON arguments into the note service.
//!
//! # Invariants
//! - Wire names (`create_note`, ...) are stable.
//! - Dispatch never panics; every failure becomes an error outcome.

mod dispatch;

pub use dispatch::{dispatch, ToolOutcome};

use serde::Serialize;
use serde_json::{json, Value};

/// The five callable note operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolName {
    CreateNote,
    ReadNote,
    ListNotes,
    UpdateNote,
    DeleteNote,
}

impl ToolName {
    /// All tools in publication order.
    pub const ALL: [ToolName; 5] = [
        ToolName::CreateNote,
        ToolName::ReadNote,
        ToolName::ListNotes,
        ToolName::UpdateNote,
        ToolName::DeleteNote,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::CreateNote => "create_note",
            Self::ReadNote => "read_note",
            Self::ListNotes => "list_notes",
            Self::UpdateNote => "update_note",
            Self::DeleteNote => "delete_note",
        }
    }

    /// Parses an exact wire name.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.as_str() == value)
    }

    fn description(self) -> &'static str {
        match self {
            Self::CreateNote => "Create a new note with a title and content",
            Self::ReadNote => "Read a note by its title",
            Self::ListNotes => "List all available note titles",
            Self::UpdateNote => "Update the content of an existing note",
            Self::DeleteNote => "Delete a note by its title",
        }
    }

    fn input_schema(self) -> Value {
        match self {
            Self::CreateNote => title_content_schema(
                "Title of the note (used as the ID)",
                "The note content/body",
            ),
            Self::UpdateNote => {
                title_content_schema("Title of the note to update", "New content for the note")
            }
            Self::ReadNote => title_schema("Title of the note to read"),
            Self::DeleteNote => title_schema("Title of the note to delete"),
            Self::ListNotes => json!({
                "type": "object",
                "properties": {},
            }),
        }
    }
}

/// Published description of one tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Returns definitions for every tool, in publication order.
pub fn tool_definitions() -> Vec<ToolDefinition> {
    ToolName::ALL
        .into_iter()
        .map(|tool| ToolDefinition {
            name: tool.as_str(),
            description: tool.description(),
            input_schema: tool.input_schema(),
        })
        .collect()
}

fn title_schema(title_description: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            "title": { "type": "string", "description": title_description },
        },
        "required": ["title"],
    })
}

fn title_content_schema(title_description: &str, content_description: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            "title": { "type": "string", "description": title_description },
            "content": { "type": "string", "description": content_description },
        },
        "required": ["title", "content"],
    })
}
