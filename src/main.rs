//! Strictly Verdict - CLI entry point

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use strictly_verdict::cli::{Cli, Command};
use strictly_verdict::{
    InputFormat, OutputFormat, VerdictConfig, read_board, read_board_file, write_verdict,
};
use strictly_verifier::VerificationResult;
use tracing::{debug, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Verify {
            path,
            format,
            output,
            config,
            show_board,
        } => run_verify(path, format, output, config, show_board),
        Command::Schema => run_schema(),
    }
}

/// Verify one board and print the verdict
#[instrument]
fn run_verify(
    path: Option<PathBuf>,
    format: InputFormat,
    output: Option<OutputFormat>,
    config_path: Option<PathBuf>,
    show_board: bool,
) -> Result<()> {
    let config = match config_path {
        Some(path) => VerdictConfig::from_file(path)?,
        None => VerdictConfig::default(),
    }
    .with_overrides(output, show_board);
    debug!(?config, "Effective configuration");

    let candidate = match &path {
        Some(path) => read_board_file(path, format)?,
        None => read_board(std::io::stdin().lock(), format)?,
    };

    let mut stdout = std::io::stdout().lock();
    write_verdict(&candidate, &config, &mut stdout)?;

    Ok(())
}

/// Print the JSON Schema of the result record
#[instrument]
fn run_schema() -> Result<()> {
    let schema = schemars::schema_for!(VerificationResult);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
