// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Notelink Contributors

//! nlrs - The library behind the notelink CLI.
//!
//! notelink links issue identifiers in markdown notes to a remote
//! issue-tracker web URL or a local note cross-reference, inferring the
//! owning project from the abbreviation prefix of the identifier
//! (`AZURE-123` is ticket `123` in the project abbreviated `azure`).
//!
//! The resolution algorithms live in `notelink-core`; this crate holds the
//! UI wiring: command definitions, settings persistence, the editor
//! boundary (stdin selection, stdout replacement), and the interactive
//! prompt and suggestion pickers used when resolution needs a human
//! decision.

mod cli;
mod commands;
mod completions;
mod editor;
mod interact;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, ConfigCommand, OutputFormat};
pub use config::{find_note_dir, init_note_dir, Settings};
pub use error::{Error, Result};

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Web {
            text,
            default,
            instance,
            project,
        } => commands::web::run(text, default, instance, project),
        Command::Local { text } => commands::local::run(text),
        Command::Init { path } => commands::init::run(path),
        Command::Config { command } => commands::config::run(command),
        Command::Completion { shell } => completions::run(shell),
    }
}
