// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Notelink Contributors

//! Tracker instances and instance selection.
//!
//! A tracker instance is a configured base URL of a remote issue-tracker
//! deployment. Selection decides which instance a command links against,
//! either by explicit choice or by the configured default.

use serde::{Deserialize, Serialize};

/// A configured issue-tracker deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerInstance {
    /// Optional display title. Empty titles fall back to the URL.
    #[serde(default)]
    pub title: String,
    /// Base address, stored without a trailing slash.
    pub url: String,
    /// Marks the instance used by `--default`. At most one per list; the
    /// configuration commands keep that invariant, not this crate.
    #[serde(default, rename = "default")]
    pub is_default: bool,
}

impl TrackerInstance {
    /// Creates an untitled, non-default instance.
    pub fn new(url: impl Into<String>) -> Self {
        TrackerInstance {
            title: String::new(),
            url: url.into(),
            is_default: false,
        }
    }

    /// Sets the title (builder pattern).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the default flag (builder pattern).
    pub fn with_default(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }

    /// Returns the title, or the URL when the title is empty.
    pub fn display_name(&self) -> &str {
        if self.title.is_empty() {
            &self.url
        } else {
            &self.title
        }
    }
}

/// Which command variant asked for an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// The user wants to pick: more than one instance suspends into a choice.
    Explicit,
    /// Use the configured default without asking.
    UseDefault,
}

/// Outcome of instance selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstanceOutcome<'a> {
    /// No instances are configured; the caller surfaces a configuration error.
    NoneConfigured,
    /// The instance to link against.
    Selected(&'a TrackerInstance),
    /// No instance is marked default; the first one is used and the caller
    /// owes the user an advisory notice naming it.
    Fallback(&'a TrackerInstance),
    /// More than one candidate; the caller must obtain a manual choice.
    NeedsChoice(&'a [TrackerInstance]),
}

/// Decides which tracker instance to link against.
///
/// Multiple instances marked default are not prevented here; the first in
/// list order wins.
pub fn select_instance(instances: &[TrackerInstance], mode: SelectionMode) -> InstanceOutcome<'_> {
    let first = match instances.first() {
        Some(first) => first,
        None => return InstanceOutcome::NoneConfigured,
    };

    match mode {
        SelectionMode::Explicit => {
            if instances.len() > 1 {
                InstanceOutcome::NeedsChoice(instances)
            } else {
                InstanceOutcome::Selected(first)
            }
        }
        SelectionMode::UseDefault => match instances.iter().find(|instance| instance.is_default) {
            Some(instance) => InstanceOutcome::Selected(instance),
            None => InstanceOutcome::Fallback(first),
        },
    }
}

#[cfg(test)]
#[path = "instance_tests.rs"]
mod tests;
