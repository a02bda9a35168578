// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Notelink Contributors

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use nlrs::Cli;

fn main() {
    setup_logging();

    let cli = Cli::parse();
    if let Err(e) = nlrs::run(cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr through `RUST_LOG`; user-facing output never
/// passes through the subscriber.
fn setup_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
