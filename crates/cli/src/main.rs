// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! dwsh binary entry point.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

mod repl;

use repl::{Session, Source};

/// A small interactive POSIX-style shell.
#[derive(Debug, Parser)]
#[command(name = "dwsh", version, about = "A small interactive shell")]
struct Cli {
    /// Script file to read commands from instead of stdin.
    file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let source = match &cli.file {
        Some(path) => Source::file(path)
            .with_context(|| format!("cannot open {}", path.display()))?,
        None => Source::stdin(),
    };

    Session::new(source).run()
}

/// `DWSH_LOG` selects tracing output on stderr; silent when unset.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("DWSH_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
