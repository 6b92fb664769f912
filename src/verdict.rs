//! Writing one verdict to an output stream.

use crate::config::{OutputFormat, VerdictConfig};
use crate::presenter::write_report;
use anyhow::Result;
use serde_json::Value;
use std::io::Write;
use strictly_verifier::{VerificationResult, Verifier, validate_shape};
use tracing::{info, instrument};

/// Verifies a candidate board and writes the verdict to `out`.
///
/// With [`OutputFormat::Json`] the stream carries exactly one JSON document;
/// `show_board` only applies to text output.
#[instrument(skip(candidate, out))]
pub fn write_verdict<W: Write>(
    candidate: &Value,
    config: &VerdictConfig,
    out: &mut W,
) -> Result<VerificationResult> {
    let result = Verifier::new(config.symbols().clone()).verify(candidate);
    info!(?result, "Verification complete");

    match config.output() {
        OutputFormat::Text => {
            if *config.show_board()
                && let Ok(board) = validate_shape(candidate, config.symbols())
            {
                writeln!(out, "{}\n", board.render(config.symbols()))?;
            }
            write_report(&result, out)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &result)?;
            writeln!(out)?;
        }
    }

    Ok(result)
}
