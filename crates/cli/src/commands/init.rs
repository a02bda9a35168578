// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Notelink Contributors

use std::path::PathBuf;

use crate::config::init_note_dir;
use crate::error::Result;

pub fn run(path: Option<String>) -> Result<()> {
    let target_path = match path {
        Some(path) => PathBuf::from(path),
        None => std::env::current_dir()?,
    };

    let note_dir = init_note_dir(&target_path)?;

    println!("Initialized notelink at {}", note_dir.display());
    println!("Edit {} or use 'notelink config' to register instances and projects", note_dir.join("config.toml").display());
    Ok(())
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
