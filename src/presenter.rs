//! Console presentation of verification results.

use std::io::{self, Write};
use strictly_verifier::{GameResult, Legality, Validity, VerificationResult};
use tracing::instrument;

/// Returns the report lines for a result: one classification line, plus a
/// cause line for illegal and invalid boards.
#[instrument(skip(result))]
pub fn report_lines(result: &VerificationResult) -> Vec<String> {
    let mut lines = Vec::with_capacity(2);

    let rejected = if result.legality() == &Legality::Illegal {
        Some("Board is ILLEGAL.")
    } else if result.validity() == &Some(Validity::Invalid) {
        Some("Board is INVALID.")
    } else {
        None
    };

    match rejected {
        Some(headline) => {
            lines.push(headline.to_string());
            if let Some(cause) = result.cause() {
                lines.push(format!("Cause: {}", cause));
            }
        }
        None => {
            if let Some(outcome) = result.result() {
                lines.push(outcome_message(*outcome).to_string());
            }
        }
    }

    lines
}

/// Fixed message for a decided game.
pub fn outcome_message(result: GameResult) -> &'static str {
    match result {
        GameResult::Draw => "Game ended in a DRAW.",
        GameResult::XWins => "X wins!",
        GameResult::OWins => "O wins!",
        GameResult::Ongoing => "Game is ONGOING.",
    }
}

/// Writes the report to any writer.
#[instrument(skip(result, out))]
pub fn write_report<W: Write>(result: &VerificationResult, out: &mut W) -> io::Result<()> {
    for line in report_lines(result) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Prints the report to stdout.
#[instrument(skip(result))]
pub fn print_report(result: &VerificationResult) {
    for line in report_lines(result) {
        println!("{}", line);
    }
}
