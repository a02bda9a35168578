// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Notelink Contributors

use thiserror::Error;

/// All possible errors that can occur in the nlrs library.
///
/// Errors provide user-friendly messages with hints for common issues. None
/// of them is fatal beyond the current invocation: nothing is written to the
/// editor before a resolution has fully succeeded, so an error always leaves
/// the selection untouched.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'notelink init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("no tracker instances configured\n  hint: add one with 'notelink config add-instance <url>'")]
    NoInstances,

    #[error("the local issue path has not been set\n  hint: set it with 'notelink config issue-path <path>'")]
    LocalPathUnset,

    #[error("the local info file name has not been set\n  hint: set it with 'notelink config info-file <name>'")]
    InfoFileUnset,

    #[error("instance not found: '{0}'\n  hint: instances are addressed by title or URL")]
    InstanceNotFound(String),

    #[error("project not found: '{0}'\n  hint: projects are addressed by abbreviation")]
    ProjectNotFound(String),

    #[error("no projects configured\n  hint: add one with 'notelink config add-project <abbrev> <name>'")]
    NoProjects,

    #[error("interactive input required but no terminal is attached\n  hint: pass the reference as an argument, or use --instance / --project to skip the pickers")]
    NonInteractive,

    #[error("operation cancelled")]
    Cancelled,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] notelink_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
