// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Notelink Contributors

//! Settings management.
//!
//! Settings are stored in `.notelink/config.toml` at the root of the notes
//! directory and found by walking up from the current directory, so any note
//! inside the tree resolves to the same configuration. The command handlers
//! load a snapshot once per invocation and treat it as immutable; the
//! `config` subcommands are the only writers.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use notelink_core::{Project, TrackerInstance};

const NOTE_DIR_NAME: &str = ".notelink";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Settings stored in `.notelink/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Configured tracker instances, in precedence order.
    pub instances: Vec<TrackerInstance>,
    /// Configured projects.
    pub projects: Vec<Project>,
    pub local: LocalSettings,
    pub input: InputSettings,
}

/// Settings for local cross-references.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalSettings {
    /// Directory local issue references point into.
    pub issue_path: String,
    /// Info file name local references end with.
    pub info_file: String,
}

impl Default for LocalSettings {
    fn default() -> Self {
        LocalSettings {
            issue_path: String::new(),
            info_file: "_Info".to_string(),
        }
    }
}

/// Settings for the interactive input prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// Append a newline when a prompted reference is linked.
    pub insert_newline_on_enter: bool,
    /// Auto-select the sole configured project when inference fails.
    pub use_first_project_as_default: bool,
}

impl Default for InputSettings {
    fn default() -> Self {
        InputSettings {
            insert_newline_on_enter: true,
            use_first_project_as_default: false,
        }
    }
}

impl Settings {
    /// Loads settings from the given `.notelink/` directory.
    pub fn load(note_dir: &Path) -> Result<Self> {
        let config_path = note_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let settings: Settings = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(settings)
    }

    /// Saves settings to the given `.notelink/` directory.
    pub fn save(&self, note_dir: &Path) -> Result<()> {
        let config_path = note_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }

    /// Registers a tracker instance.
    ///
    /// A single trailing `/` is stripped from the URL at save time; nothing
    /// else about the URL is normalized or validated. Marking the new
    /// instance default clears the flag everywhere else.
    pub fn add_instance(
        &mut self,
        url: &str,
        title: Option<&str>,
        default: bool,
    ) -> &TrackerInstance {
        let url = url.strip_suffix('/').unwrap_or(url);
        if default {
            self.clear_default_flags();
        }
        let mut instance = TrackerInstance::new(url).with_default(default);
        if let Some(title) = title {
            instance = instance.with_title(title);
        }
        self.instances.push(instance);
        // Just pushed, the list cannot be empty.
        &self.instances[self.instances.len() - 1]
    }

    /// Removes the first instance whose title or URL matches.
    pub fn remove_instance(&mut self, ident: &str) -> Result<TrackerInstance> {
        let index = self
            .instance_index(ident)
            .ok_or_else(|| Error::InstanceNotFound(ident.to_string()))?;
        Ok(self.instances.remove(index))
    }

    /// Marks the matching instance as the default, clearing every other
    /// default flag so at most one instance carries it.
    pub fn set_default_instance(&mut self, ident: &str) -> Result<&TrackerInstance> {
        let index = self
            .instance_index(ident)
            .ok_or_else(|| Error::InstanceNotFound(ident.to_string()))?;
        self.clear_default_flags();
        self.instances[index].is_default = true;
        Ok(&self.instances[index])
    }

    /// Finds an instance by title first, then by URL.
    pub fn find_instance(&self, ident: &str) -> Option<&TrackerInstance> {
        self.instance_index(ident).map(|index| &self.instances[index])
    }

    fn instance_index(&self, ident: &str) -> Option<usize> {
        self.instances
            .iter()
            .position(|instance| !instance.title.is_empty() && instance.title == ident)
            .or_else(|| {
                self.instances
                    .iter()
                    .position(|instance| instance.url == ident)
            })
    }

    fn clear_default_flags(&mut self) {
        for instance in &mut self.instances {
            instance.is_default = false;
        }
    }

    /// Registers a project. Duplicate abbreviations are accepted; lookup
    /// takes the first match.
    pub fn add_project(&mut self, abbreviation: &str, name: &str) {
        self.projects.push(Project::new(name, abbreviation));
    }

    /// Removes the first project whose abbreviation matches,
    /// case-insensitively.
    pub fn remove_project(&mut self, abbreviation: &str) -> Result<Project> {
        let wanted = abbreviation.to_lowercase();
        let index = self
            .projects
            .iter()
            .position(|project| project.abbreviation.to_lowercase() == wanted)
            .ok_or_else(|| Error::ProjectNotFound(abbreviation.to_string()))?;
        Ok(self.projects.remove(index))
    }
}

/// Find the `.notelink` directory by walking up from the current directory.
pub fn find_note_dir() -> Result<PathBuf> {
    find_note_dir_from(&std::env::current_dir()?)
}

fn find_note_dir_from(start: &Path) -> Result<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let note_dir = current.join(NOTE_DIR_NAME);
        if note_dir.is_dir() {
            return Ok(note_dir);
        }
        if !current.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

/// Initialize a new `.notelink` directory at the given path.
pub fn init_note_dir(path: &Path) -> Result<PathBuf> {
    let note_dir = path.join(NOTE_DIR_NAME);

    if note_dir.join(CONFIG_FILE_NAME).exists() {
        return Err(Error::AlreadyInitialized(note_dir.display().to_string()));
    }

    fs::create_dir_all(&note_dir)?;
    Settings::default().save(&note_dir)?;

    Ok(note_dir)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
