// Copyright 2025 the VeloGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The `velograph` command line.
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`
//! (default `warn`), e.g. `RUST_LOG=velograph_client=debug`.

mod cli;
mod commands;
mod output;

use clap::Parser as _;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    commands::run(cli::Cli::parse())
}
