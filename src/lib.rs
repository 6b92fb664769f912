//! Strictly Verdict library - the outer surface of the board verifier
//!
//! Wraps [`strictly_verifier`] with what a command-line tool needs.
//!
//! # Architecture
//!
//! - **Config**: symbol set and output defaults from TOML
//! - **Input**: board documents from files or stdin, as JSON or text grids
//! - **Presenter**: human-readable report lines on stdout
//! - **Verdict**: verification plus text or JSON output to any writer
//!
//! # Example
//!
//! ```
//! use strictly_verdict::{InputFormat, VerdictConfig, parse_board, report_lines};
//! use strictly_verifier::Verifier;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = VerdictConfig::default();
//! let board = parse_board("XX-\nOO-\nX-O", InputFormat::Text)?;
//! let result = Verifier::new(config.symbols().clone()).verify(&board);
//! assert_eq!(report_lines(&result), vec!["Game is ONGOING."]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod input;
mod presenter;
mod verdict;

pub mod cli;

// Crate-level exports - Configuration
pub use config::{ConfigError, OutputFormat, VerdictConfig};

// Crate-level exports - Input loading
pub use input::{
    InputError, InputFormat, parse_board, parse_text_grid, read_board, read_board_file,
};

// Crate-level exports - Presentation
pub use presenter::{outcome_message, print_report, report_lines, write_report};

// Crate-level exports - Verdict output
pub use verdict::write_verdict;
