// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Notelink Contributors

//! Command handlers.
//!
//! Each handler follows the same shape: a thin `run` that wires the terminal
//! collaborators together, and a `*_impl` that takes the settings snapshot
//! and the collaborator traits so tests can drive it directly.

pub mod config;
pub mod init;
pub mod local;
pub mod web;

use crate::config::{find_note_dir, Settings};
use crate::editor::Editor;
use crate::error::Result;
use crate::interact::Interact;

/// Loads the settings snapshot for one command invocation.
pub(crate) fn load_settings() -> Result<Settings> {
    let note_dir = find_note_dir()?;
    tracing::debug!("using settings from {}", note_dir.display());
    Settings::load(&note_dir)
}

/// Obtains the identifier text: explicit argument first, then the editor
/// selection, then the interactive prompt. The boolean reports whether the
/// text came from the prompt, which is what the newline option keys off.
pub(crate) fn obtain_text(
    text: Option<String>,
    editor: &mut dyn Editor,
    interact: &mut dyn Interact,
    description: &str,
) -> Result<(String, bool)> {
    if let Some(text) = text {
        return Ok((text, false));
    }

    let selection = editor.selection()?;
    if !selection.is_empty() {
        return Ok((selection, false));
    }

    match interact.prompt_reference(description)? {
        Some(entered) => Ok((entered, true)),
        None => Ok((String::new(), true)),
    }
}

/// Writes the finished link into the editor. Nothing reaches the editor on
/// any earlier failure, so the selection survives aborted invocations.
pub(crate) fn emit(editor: &mut dyn Editor, link: &str, append_newline: bool) -> Result<()> {
    if append_newline {
        editor.replace_selection(&format!("{}\n", link))
    } else {
        editor.replace_selection(link)
    }
}
