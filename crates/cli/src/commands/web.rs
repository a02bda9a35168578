// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Notelink Contributors

//! The web-link command: resolve a reference against a tracker instance.

use notelink_core::{
    find_project, resolve_web_link, select_instance, web_link, InstanceOutcome, IssueReference,
    LinkOutcome, SelectionMode, TrackerInstance,
};

use crate::config::Settings;
use crate::editor::{Editor, StreamEditor};
use crate::error::{Error, Result};
use crate::interact::{Interact, TerminalInteract};

use super::{emit, load_settings, obtain_text};

const PROMPT_DESCRIPTION: &str =
    "Enter an issue reference which will then be appended to your tracker URL";
const INSTANCE_PLACEHOLDER: &str = "Select a tracker instance";
const UNKNOWN_PROJECT_PLACEHOLDER: &str =
    "Reference contains an unknown project, what project would you like to use?";
const PARSE_FAILED_PLACEHOLDER: &str =
    "Project parse failed, select the project to use as a reference";

pub fn run(
    text: Option<String>,
    use_default: bool,
    instance: Option<String>,
    project: Option<String>,
) -> Result<()> {
    let settings = load_settings()?;
    let mode = if use_default {
        SelectionMode::UseDefault
    } else {
        SelectionMode::Explicit
    };
    link_impl(
        &settings,
        mode,
        instance.as_deref(),
        project.as_deref(),
        text,
        &mut StreamEditor,
        &mut TerminalInteract,
    )
}

/// Full web-link flow against an already-loaded settings snapshot.
pub(crate) fn link_impl(
    settings: &Settings,
    mode: SelectionMode,
    instance_override: Option<&str>,
    project_override: Option<&str>,
    text: Option<String>,
    editor: &mut dyn Editor,
    interact: &mut dyn Interact,
) -> Result<()> {
    // The instance is settled before any text is asked for, so a missing
    // tracker URL aborts without bothering the user for input.
    let tracker_url = resolve_instance_url(settings, mode, instance_override, interact)?;
    tracing::debug!("linking against {}", tracker_url);

    let (raw, from_prompt) = obtain_text(text, editor, interact, PROMPT_DESCRIPTION)?;
    if raw.is_empty() {
        tracing::debug!("empty reference, nothing to do");
        return Ok(());
    }

    let policy = settings.input.use_first_project_as_default;
    let link = match resolve_web_link(&raw, &tracker_url, &settings.projects, policy)? {
        LinkOutcome::Resolved(link) => link,
        LinkOutcome::NeedsProjectChoice { raw, candidates } => {
            let chosen = match project_override {
                Some(abbreviation) => find_project(&settings.projects, abbreviation)
                    .ok_or_else(|| Error::ProjectNotFound(abbreviation.to_string()))?,
                None => {
                    if candidates.is_empty() {
                        return Err(Error::NoProjects);
                    }
                    let placeholder = if IssueReference::parse(&raw).abbreviation.is_some() {
                        UNKNOWN_PROJECT_PLACEHOLDER
                    } else {
                        PARSE_FAILED_PLACEHOLDER
                    };
                    interact
                        .choose_project(&candidates, placeholder)?
                        .ok_or(Error::Cancelled)?
                }
            };
            web_link(&raw, &tracker_url, chosen)?
        }
    };

    emit(
        editor,
        &link,
        from_prompt && settings.input.insert_newline_on_enter,
    )
}

/// Selects the tracker instance and returns its base URL.
fn resolve_instance_url(
    settings: &Settings,
    mode: SelectionMode,
    instance_override: Option<&str>,
    interact: &mut dyn Interact,
) -> Result<String> {
    if let Some(ident) = instance_override {
        let instance = settings
            .find_instance(ident)
            .ok_or_else(|| Error::InstanceNotFound(ident.to_string()))?;
        return instance_url(instance);
    }

    match select_instance(&settings.instances, mode) {
        InstanceOutcome::NoneConfigured => Err(Error::NoInstances),
        InstanceOutcome::Selected(instance) => instance_url(instance),
        InstanceOutcome::Fallback(instance) => {
            interact.notify(&format!(
                "no default instance configured, using the first instance available: {}",
                instance.display_name()
            ));
            instance_url(instance)
        }
        InstanceOutcome::NeedsChoice(candidates) => {
            let chosen = interact
                .choose_instance(candidates, INSTANCE_PLACEHOLDER)?
                .ok_or(Error::Cancelled)?;
            instance_url(chosen)
        }
    }
}

/// An instance with an empty URL is as missing as no instance at all.
fn instance_url(instance: &TrackerInstance) -> Result<String> {
    if instance.url.is_empty() {
        return Err(Error::NoInstances);
    }
    Ok(instance.url.clone())
}

#[cfg(test)]
#[path = "web_tests.rs"]
mod tests;
