// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Notelink Contributors

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

// Custom help template that groups commands into sections
const HELP_TEMPLATE: &str = "{about-with-newline}
{usage-heading} {usage}

{before-help}Options:
{options}{after-help}";

const COMMANDS_HELP: &str = "\
Linking:
  web         Link an issue reference to its tracker web URL
  local       Link an issue reference to its local info note

Setup & Configuration:
  init        Initialize a notes directory for notelink
  config      Manage tracker instances, projects, and options
  completion  Generate shell completions";

const QUICKSTART_HELP: &str = "\
Get started:
  notelink init                                      Initialize the notes directory
  notelink config add-instance <url> --default       Register a tracker instance
  notelink config add-project azure \"Azure DevOps\"   Register a project
  notelink web AZURE-123                             Emit a web link for an issue";

#[derive(Parser)]
#[command(name = "notelink")]
#[command(version)]
#[command(about = "Link issue-tracker references in markdown notes")]
#[command(
    long_about = "Link issue-tracker references in markdown notes.\n\n\
    References like AZURE-123 resolve to the configured tracker instance and\n\
    project; the finished link is written to stdout so the editor can swap it\n\
    in for the selection."
)]
#[command(help_template = HELP_TEMPLATE)]
#[command(before_help = COMMANDS_HELP)]
#[command(after_help = QUICKSTART_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Link an issue reference to its tracker web URL
    #[command(after_help = "Examples:\n  \
        notelink web AZURE-123                 Resolve the project from the prefix\n  \
        echo AZURE-123 | notelink web          Use the piped selection\n  \
        notelink web --default AZURE-123       Use the default instance without asking\n  \
        notelink web XYZ-5 --project azure     Pick the project without the picker\n  \
        notelink web                           Prompt for the reference")]
    Web {
        /// Issue reference (read from stdin or prompted for when omitted)
        text: Option<String>,

        /// Use the default instance instead of asking which one
        #[arg(long)]
        default: bool,

        /// Instance to use, by title or URL (skips the picker)
        #[arg(long)]
        instance: Option<String>,

        /// Project to use when the abbreviation cannot be inferred
        #[arg(long)]
        project: Option<String>,
    },

    /// Link an issue reference to its local info note
    #[command(after_help = "Examples:\n  \
        notelink local AZURE-123               [[<issue-path>/AZURE-123/<info-file>|AZURE-123]]\n  \
        echo AZURE-123 | notelink local        Use the piped selection")]
    Local {
        /// Issue reference (read from stdin or prompted for when omitted)
        text: Option<String>,
    },

    /// Initialize a notes directory for notelink
    Init {
        /// Directory to initialize (defaults to the current directory)
        #[arg(long)]
        path: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the current configuration
    Show {
        /// Output format (text, json)
        #[arg(long, short, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Register a tracker instance
    AddInstance {
        /// Base URL of the tracker deployment
        url: String,

        /// Display title (optional, recommended for organization)
        #[arg(long)]
        title: Option<String>,

        /// Mark this instance as the default
        #[arg(long)]
        default: bool,
    },

    /// Remove a tracker instance, addressed by title or URL
    RemoveInstance {
        /// Title or URL of the instance
        instance: String,
    },

    /// Mark an instance as the default, addressed by title or URL
    DefaultInstance {
        /// Title or URL of the instance
        instance: String,
    },

    /// Register a project under its reference abbreviation
    AddProject {
        /// Abbreviation used before the '-' in references
        abbreviation: String,

        /// Project name as it appears in tracker URLs
        name: String,
    },

    /// Remove a project, addressed by abbreviation
    RemoveProject {
        /// Abbreviation of the project
        abbreviation: String,
    },

    /// Set the path local issue references point into
    IssuePath {
        /// Path relative to the notes root
        path: String,
    },

    /// Set the info file name local references end with
    InfoFile {
        /// File name, e.g. "_Info"
        name: String,
    },

    /// Append a newline when a prompted reference is linked
    Newline {
        /// true or false
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },

    /// Auto-select the sole configured project when inference fails
    AutoProject {
        /// true or false
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
