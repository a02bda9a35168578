// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Notelink Contributors

//! End-to-end specs for the notelink CLI.

#![cfg(test)]

mod cli;
