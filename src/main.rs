// src/main.rs

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default verbosity comes from -v/-q; RUST_LOG still wins when set.
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    commands::cmd_convert(&cli)
}
