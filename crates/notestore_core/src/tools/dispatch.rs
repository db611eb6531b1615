//! Tool call execution.
//!
//! Maps `(name, arguments)` onto `NoteService` calls and renders the
//! human-readable text returned to the agent.

use super::ToolName;
use crate::repo::note_repo::NoteRepository;
use crate::service::note_service::{NoteService, NoteServiceError};
use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result envelope for one tool call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolOutcome {
    /// Whether the call failed.
    pub is_error: bool,
    /// Text shown to the agent.
    pub text: String,
}

impl ToolOutcome {
    fn success(text: impl Into<String>) -> Self {
        Self {
            is_error: false,
            text: text.into(),
        }
    }

    fn failure(text: impl Into<String>) -> Self {
        Self {
            is_error: true,
            text: format!("Error: {}", text.into()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TitleArgs {
    title: String,
}

#[derive(Debug, Deserialize)]
struct TitleContentArgs {
    title: String,
    content: String,
}

/// Executes one named tool call against `service`.
///
/// Unknown names and malformed arguments produce error outcomes rather than
/// panics or `Err` values.
pub fn dispatch<R: NoteRepository>(
    service: &NoteService<R>,
    name: &str,
    arguments: Value,
) -> ToolOutcome {
    let Some(tool) = ToolName::parse(name) else {
        warn!("event=tool_call module=tools status=error error_code=unknown_tool");
        return ToolOutcome::failure(format!("Unknown tool: {name}"));
    };

    match tool {
        ToolName::CreateNote => with_args(tool, arguments, |args: TitleContentArgs| {
            match service.create_note(args.title.as_str(), args.content) {
                Ok(_) => ToolOutcome::success(format!(
                    "Successfully created note '{}'",
                    args.title
                )),
                Err(NoteServiceError::AlreadyExists(title)) => ToolOutcome::failure(format!(
                    "A note with title '{title}' already exists. Use update_note to modify it."
                )),
                Err(err) => failure_from(err),
            }
        }),
        ToolName::ReadNote => with_args(tool, arguments, |args: TitleArgs| {
            match service.read_note(args.title.as_str()) {
                Ok(content) => ToolOutcome::success(format!("Note '{}':\n\n{content}", args.title)),
                Err(err) => failure_from(err),
            }
        }),
        ToolName::ListNotes => match service.list_notes() {
            Ok(titles) if titles.is_empty() => {
                ToolOutcome::success("No notes found. Create your first note!")
            }
            Ok(titles) => {
                let listing = titles
                    .iter()
                    .map(|title| format!("- {title}"))
                    .collect::<Vec<_>>()
                    .join("\n");
                ToolOutcome::success(format!("Available notes ({}):\n{listing}", titles.len()))
            }
            Err(err) => failure_from(err),
        },
        ToolName::UpdateNote => with_args(tool, arguments, |args: TitleContentArgs| {
            match service.update_note(args.title.as_str(), args.content) {
                Ok(_) => ToolOutcome::success(format!(
                    "Successfully updated note '{}'",
                    args.title
                )),
                Err(NoteServiceError::NotFound(title)) => ToolOutcome::failure(format!(
                    "No note found with title '{title}'. Use create_note to make a new one."
                )),
                Err(err) => failure_from(err),
            }
        }),
        ToolName::DeleteNote => with_args(tool, arguments, |args: TitleArgs| {
            match service.delete_note(args.title.as_str()) {
                Ok(()) => ToolOutcome::success(format!(
                    "Successfully deleted note '{}'",
                    args.title
                )),
                Err(err) => failure_from(err),
            }
        }),
    }
}

fn with_args<A: DeserializeOwned>(
    tool: ToolName,
    arguments: Value,
    run: impl FnOnce(A) -> ToolOutcome,
) -> ToolOutcome {
    match serde_json::from_value::<A>(arguments) {
        Ok(args) => run(args),
        Err(err) => {
            warn!(
                "event=tool_call module=tools status=error tool={} error_code=invalid_arguments",
                tool.as_str()
            );
            ToolOutcome::failure(format!(
                "Invalid arguments for {}: {err}",
                tool.as_str()
            ))
        }
    }
}

fn failure_from(err: NoteServiceError) -> ToolOutcome {
    match err {
        NoteServiceError::NotFound(title) => {
            ToolOutcome::failure(format!("No note found with title '{title}'"))
        }
        other => ToolOutcome::failure(capitalize_first(other.to_string())),
    }
}

fn capitalize_first(message: String) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => message,
    }
}
