// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Notelink Contributors

//! Error types for notelink-core operations.

use thiserror::Error;

/// All possible errors that can occur in notelink-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no '-' separator in '{0}': cannot extract a ticket id\n  hint: issue references look like ABBREV-123")]
    TicketIdMissing(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
