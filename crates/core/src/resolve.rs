// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Notelink Contributors

//! Web-link resolution.
//!
//! Given free-form identifier text and the configured project list, decide
//! which project the reference belongs to and synthesize the markdown link,
//! or signal that the caller must obtain a project choice first.

use crate::error::{Error, Result};
use crate::project::{find_project, Project};
use crate::reference::IssueReference;

/// Outcome of resolving a reference against a tracker instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    /// The completed markdown link.
    Resolved(String),
    /// The project could not be determined; the caller obtains a choice
    /// from the candidates and resumes via [`web_link`].
    NeedsProjectChoice {
        /// The identifier exactly as typed or selected.
        raw: String,
        /// The full configured project list.
        candidates: Vec<Project>,
    },
}

/// Resolves identifier text to a tracker web link.
///
/// The abbreviation prefix is matched case-insensitively against the
/// configured projects. When no project can be inferred, a single-entry
/// project list is auto-selected if `use_single_project_default` is on;
/// otherwise the outcome asks the caller to disambiguate.
pub fn resolve_web_link(
    raw: &str,
    tracker_url: &str,
    projects: &[Project],
    use_single_project_default: bool,
) -> Result<LinkOutcome> {
    let reference = IssueReference::parse(raw);

    if let Some(abbreviation) = &reference.abbreviation {
        if let Some(project) = find_project(projects, abbreviation) {
            return Ok(LinkOutcome::Resolved(web_link(raw, tracker_url, project)?));
        }
    }

    if use_single_project_default && projects.len() == 1 {
        return Ok(LinkOutcome::Resolved(web_link(raw, tracker_url, &projects[0])?));
    }

    Ok(LinkOutcome::NeedsProjectChoice {
        raw: raw.to_string(),
        candidates: projects.to_vec(),
    })
}

/// Synthesizes the markdown link for a known project.
///
/// The ticket id is everything after the first `-`. A reference without a
/// separator cannot produce a link; that is reachable when disambiguation
/// picked a project for text that never had one.
pub fn web_link(raw: &str, tracker_url: &str, project: &Project) -> Result<String> {
    let reference = IssueReference::parse(raw);
    let ticket_id = reference
        .ticket_id
        .ok_or_else(|| Error::TicketIdMissing(raw.to_string()))?;
    Ok(format!(
        "[{}]({}/{}/_workitems/edit/{})",
        raw,
        tracker_url,
        encode_project_name(&project.name),
        ticket_id
    ))
}

/// Percent-encodes spaces in a project name.
///
/// Spaces are the only characters escaped; tracker deployments in the wild
/// do not all tolerate a fully URL-encoded path segment.
fn encode_project_name(name: &str) -> String {
    name.replace(' ', "%20")
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
