// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Notelink Contributors

//! notelink-core: Resolution logic for the notelink CLI
//!
//! This crate provides the pure algorithms behind notelink: parsing issue
//! references, inferring the owning project from an abbreviation prefix,
//! synthesizing tracker web links and local note cross-references, and
//! selecting the tracker instance to link against.
//!
//! Nothing here performs I/O or talks to a terminal. Operations that need a
//! user decision return a discriminated outcome
//! ([`LinkOutcome::NeedsProjectChoice`], [`InstanceOutcome::NeedsChoice`])
//! and the caller re-enters with the chosen value.

pub mod error;
pub mod instance;
pub mod local;
pub mod project;
pub mod reference;
pub mod resolve;

pub use error::{Error, Result};
pub use instance::{select_instance, InstanceOutcome, SelectionMode, TrackerInstance};
pub use local::local_reference;
pub use project::{find_project, Project};
pub use reference::IssueReference;
pub use resolve::{resolve_web_link, web_link, LinkOutcome};
