// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Notelink Contributors

//! Projects and abbreviation lookup.

use serde::{Deserialize, Serialize};

/// A project on a tracker instance, identified in issue references by the
/// abbreviation prefix before the `-`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project name as it appears in tracker URLs (before escaping).
    pub name: String,
    /// Short case-insensitive token. Abbreviations should be unique within
    /// a configuration; duplicates are not rejected and the first match wins.
    pub abbreviation: String,
}

impl Project {
    pub fn new(name: impl Into<String>, abbreviation: impl Into<String>) -> Self {
        Project {
            name: name.into(),
            abbreviation: abbreviation.into(),
        }
    }
}

/// Finds the project whose abbreviation matches, case-insensitively.
pub fn find_project<'a>(projects: &'a [Project], abbreviation: &str) -> Option<&'a Project> {
    let wanted = abbreviation.to_lowercase();
    projects
        .iter()
        .find(|project| project.abbreviation.to_lowercase() == wanted)
}

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;
