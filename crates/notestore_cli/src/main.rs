//! Command-line entry point for the note store.
//!
//! # Responsibility
//! - Run one note operation per invocation against the configured file.
//! - Expose the named tool surface (`tools`, `call`) for agent wiring checks.
//!
//! # Invariants
//! - Results go to stdout, failures to stderr with a non-zero exit code.
//! - Logs never go to stdout.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use log::debug;
use notestore_core::{
    default_log_level, dispatch, init_logging, tool_definitions, LoggingConfig, NoteServiceError,
    StoreConfig,
};
use std::path::PathBuf;
use std::process::ExitCode;

const STDERR_LOG_LEVEL: &str = "warn";

#[derive(Parser)]
#[command(name = "notestore")]
#[command(about = "Persistent title -> content note store")]
#[command(version)]
struct Cli {
    /// Backing JSON file (default: $NOTESTORE_PATH or ~/claude_notes.json)
    #[arg(long, global = true)]
    notes_file: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files (default: stderr)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all note titles
    List,
    /// Create a new note
    Create { title: String, content: String },
    /// Print a note's content
    Read { title: String },
    /// Replace a note's content
    Update { title: String, content: String },
    /// Delete a note
    Delete { title: String },
    /// Print tool definitions as JSON
    Tools,
    /// Invoke one named tool with JSON arguments
    Call {
        /// Tool name, e.g. `create_note`
        tool: String,
        /// JSON object with the tool's arguments
        #[arg(default_value = "{}")]
        arguments: String,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let logging = match cli.log_dir.clone() {
        Some(dir) => LoggingConfig::files(
            cli.log_level.clone().unwrap_or_else(|| default_log_level().to_string()),
            dir,
        ),
        None => LoggingConfig::stderr(
            cli.log_level
                .clone()
                .unwrap_or_else(|| STDERR_LOG_LEVEL.to_string()),
        ),
    };
    init_logging(&logging).map_err(|err| anyhow!("{err}"))?;

    let config = StoreConfig::resolve(cli.notes_file);
    debug!(
        "event=cli_start module=cli status=ok notes_path={}",
        config.notes_path.display()
    );
    let service = config.open_service();

    let outcome: Result<String, NoteServiceError> = match cli.command {
        Commands::List => service.list_notes().map(|titles| titles.join("\n")),
        Commands::Create { title, content } => service
            .create_note(title, content)
            .map(|note| format!("Created note '{}'", note.title)),
        Commands::Read { title } => service.read_note(title.as_str()),
        Commands::Update { title, content } => service
            .update_note(title, content)
            .map(|note| format!("Updated note '{}'", note.title)),
        Commands::Delete { title } => service
            .delete_note(title.as_str())
            .map(|()| format!("Deleted note '{title}'")),
        Commands::Tools => {
            let rendered = serde_json::to_string_pretty(&tool_definitions())
                .context("failed to render tool definitions")?;
            println!("{rendered}");
            return Ok(ExitCode::SUCCESS);
        }
        Commands::Call { tool, arguments } => {
            let arguments: serde_json::Value = serde_json::from_str(arguments.as_str())
                .context("tool arguments must be valid JSON")?;
            let result = dispatch(&service, tool.as_str(), arguments);
            return Ok(if result.is_error {
                eprintln!("{}", result.text);
                ExitCode::FAILURE
            } else {
                println!("{}", result.text);
                ExitCode::SUCCESS
            });
        }
    };

    match outcome {
        Ok(text) => {
            if !text.is_empty() {
                println!("{text}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("error[{}]: {err}", err.code());
            Ok(ExitCode::FAILURE)
        }
    }
}
