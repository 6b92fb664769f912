//! Command-line interface for strictly_verdict.

use crate::config::OutputFormat;
use crate::input::InputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Verdict - tic-tac-toe board verifier
#[derive(Parser, Debug)]
#[command(name = "strictly_verdict")]
#[command(
    about = "Checks whether a tic-tac-toe board is legal, reachable and decided",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Verify a board read from a file or stdin
    Verify {
        /// Board file. Reads stdin when omitted.
        path: Option<PathBuf>,

        /// Input format
        #[arg(short, long, value_enum, default_value = "auto")]
        format: InputFormat,

        /// Output format (overrides the config file)
        #[arg(short, long, value_enum)]
        output: Option<OutputFormat>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the parsed board before the report
        #[arg(long)]
        show_board: bool,
    },

    /// Print the JSON Schema of the verification result
    Schema,
}
