// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Notelink Contributors

//! Shell completion generation for notelink.

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::error::Result;

/// Generate a completion script on stdout.
pub fn run(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "notelink", &mut std::io::stdout());
    Ok(())
}
