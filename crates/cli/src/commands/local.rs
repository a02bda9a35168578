// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Notelink Contributors

//! The local-link command: point a reference at its info note.

use notelink_core::local_reference;

use crate::config::Settings;
use crate::editor::{Editor, StreamEditor};
use crate::error::{Error, Result};
use crate::interact::{Interact, TerminalInteract};

use super::{emit, load_settings, obtain_text};

const PROMPT_DESCRIPTION: &str =
    "Enter an issue reference to be constructed into your local issue path";

pub fn run(text: Option<String>) -> Result<()> {
    let settings = load_settings()?;
    link_impl(&settings, text, &mut StreamEditor, &mut TerminalInteract)
}

/// Local-link flow against an already-loaded settings snapshot.
///
/// The identifier is used verbatim; no project resolution is involved.
pub(crate) fn link_impl(
    settings: &Settings,
    text: Option<String>,
    editor: &mut dyn Editor,
    interact: &mut dyn Interact,
) -> Result<()> {
    if settings.local.issue_path.is_empty() {
        return Err(Error::LocalPathUnset);
    }
    if settings.local.info_file.is_empty() {
        return Err(Error::InfoFileUnset);
    }

    let (raw, from_prompt) = obtain_text(text, editor, interact, PROMPT_DESCRIPTION)?;
    if raw.is_empty() {
        tracing::debug!("empty reference, nothing to do");
        return Ok(());
    }

    let link = local_reference(&settings.local.issue_path, &raw, &settings.local.info_file);
    emit(
        editor,
        &link,
        from_prompt && settings.input.insert_newline_on_enter,
    )
}

#[cfg(test)]
#[path = "local_tests.rs"]
mod tests;
