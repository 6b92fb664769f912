//! Board verification.
//!
//! Rules are evaluated in a fixed order and the first one that applies
//! decides the result:
//!
//! 1. shape (ILLEGAL)
//! 2. both players hold a line
//! 3. move counts cannot come from alternating play
//! 4. X won: X must have moved last
//! 5. O won: O must have moved last, and a cell must remain empty
//! 6. full board: X must have moved last
//! 7. otherwise the game is ongoing

use super::outcome::{Cause, GameResult, VerificationResult};
use super::rules::{MarkCounts, Winners};
use super::shape::{board_from_rows, validate_shape};
use super::types::{Board, Symbols};
use derive_getters::Getters;
use serde_json::Value;
use tracing::{debug, instrument};

/// Verifies candidate boards spelled with a given symbol set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct Verifier {
    /// Spelling of X, O and empty cells.
    symbols: Symbols,
}

impl Verifier {
    /// Creates a verifier for the given symbols.
    #[instrument]
    pub fn new(symbols: Symbols) -> Self {
        Self { symbols }
    }

    /// Classifies a candidate value of any shape.
    ///
    /// Never fails: malformed input is reported as ILLEGAL.
    #[instrument(skip(self, candidate))]
    pub fn verify(&self, candidate: &Value) -> VerificationResult {
        match validate_shape(candidate, &self.symbols) {
            Ok(board) => verify_board(&board),
            Err(e) => {
                debug!(error = %e, "Board is illegal");
                VerificationResult::illegal()
            }
        }
    }

    /// Classifies in-memory rows of symbols.
    #[instrument(skip(self, rows))]
    pub fn verify_rows<R, S>(&self, rows: &[R]) -> VerificationResult
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        match board_from_rows(rows, &self.symbols) {
            Ok(board) => verify_board(&board),
            Err(e) => {
                debug!(error = %e, "Board is illegal");
                VerificationResult::illegal()
            }
        }
    }
}

/// Classifies a candidate value using the default symbols (`X`, `O`, `-`).
#[instrument(skip(candidate))]
pub fn verify(candidate: &Value) -> VerificationResult {
    Verifier::default().verify(candidate)
}

/// Classifies a board that already passed shape validation.
#[instrument(skip(board), fields(size = board.size()))]
pub fn verify_board(board: &Board) -> VerificationResult {
    let counts = MarkCounts::of(board);
    let winners = Winners::find(board);
    debug!(
        x = counts.x,
        o = counts.o,
        empty = counts.empty,
        x_won = winners.x_won(),
        o_won = winners.o_won(),
        "Board tallied"
    );

    let result = classify(&counts, &winners);
    debug!(?result, "Board classified");
    result
}

fn classify(counts: &MarkCounts, winners: &Winners) -> VerificationResult {
    if winners.x_won() && winners.o_won() {
        return VerificationResult::invalid(Cause::BothPlayersWon, None);
    }

    if !counts.is_alternating() {
        return VerificationResult::invalid(Cause::InvalidMoveCount, None);
    }

    if winners.x_won() {
        if !counts.x_moved_last() {
            return VerificationResult::invalid(Cause::XWinMoveCount, Some(GameResult::XWins));
        }
        return VerificationResult::valid(GameResult::XWins);
    }

    if winners.o_won() {
        if counts.x != counts.o {
            return VerificationResult::invalid(Cause::OWinMoveCount, Some(GameResult::OWins));
        }
        if counts.is_full() {
            return VerificationResult::invalid(Cause::OWinFullBoard, Some(GameResult::OWins));
        }
        return VerificationResult::valid(GameResult::OWins);
    }

    if counts.is_full() {
        if !counts.x_moved_last() {
            return VerificationResult::invalid(Cause::DrawMoveCount, Some(GameResult::Draw));
        }
        return VerificationResult::valid(GameResult::Draw);
    }

    VerificationResult::valid(GameResult::Ongoing)
}
