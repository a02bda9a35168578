// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Notelink Contributors

//! The editor boundary.
//!
//! notelink behaves like a filter over an editor selection: the selected
//! text arrives on stdin when something is piped in, and the replacement is
//! written to stdout. Nothing is written until a resolution has fully
//! succeeded, so a failed invocation leaves the selection untouched.

use std::io::{IsTerminal, Read, Write};

use crate::error::Result;

/// The host editor as seen by the command handlers.
pub trait Editor {
    /// Returns the current selection, possibly empty.
    fn selection(&mut self) -> Result<String>;

    /// Replaces the selection with the given text.
    fn replace_selection(&mut self, text: &str) -> Result<()>;
}

/// Editor over the process streams: piped stdin is the selection, stdout
/// receives the replacement.
pub struct StreamEditor;

impl Editor for StreamEditor {
    fn selection(&mut self) -> Result<String> {
        let mut stdin = std::io::stdin();
        if stdin.is_terminal() {
            // Nothing piped in means nothing is selected.
            return Ok(String::new());
        }
        let mut text = String::new();
        stdin.read_to_string(&mut text)?;
        strip_trailing_newline(&mut text);
        Ok(text)
    }

    fn replace_selection(&mut self, text: &str) -> Result<()> {
        let mut stdout = std::io::stdout();
        stdout.write_all(text.as_bytes())?;
        if stdout.is_terminal() && !text.ends_with('\n') {
            stdout.write_all(b"\n")?;
        }
        stdout.flush()?;
        Ok(())
    }
}

/// A trailing newline is shell plumbing, not part of the selection.
fn strip_trailing_newline(text: &mut String) {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
}

#[cfg(test)]
#[path = "editor_tests.rs"]
mod tests;
