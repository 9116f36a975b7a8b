//! Binary crate for the `zipcast` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - The interactive postal code form and configuration prompts
//! - Printing the rendered page

use std::process::ExitCode;

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
