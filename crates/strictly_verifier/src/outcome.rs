//! Verification outcome types.

use derive_getters::Getters;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Whether the input is a well-formed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Legality {
    /// Square grid of known symbols.
    Legal,
    /// Anything else.
    Illegal,
}

/// Whether a legal board is reachable by alternating play from an empty board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Validity {
    /// Reachable.
    Valid,
    /// Not reachable.
    Invalid,
}

/// Game outcome read off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameResult {
    /// Full board, no winner.
    Draw,
    /// X holds a line.
    XWins,
    /// O holds a line.
    OWins,
    /// No winner yet and moves remain.
    Ongoing,
}

/// Explanation attached to an illegal or invalid board.
///
/// Serializes as its message text.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum Cause {
    /// Shape validation failed.
    #[serde(rename = "Board is not a square or contains illegal values.")]
    #[display("Board is not a square or contains illegal values.")]
    IllegalShape,

    /// X and O both hold a line.
    #[serde(rename = "Both players cannot win.")]
    #[display("Both players cannot win.")]
    BothPlayersWon,

    /// Mark counts cannot come from alternating play.
    #[serde(rename = "Invalid number of moves.")]
    #[display("Invalid number of moves.")]
    InvalidMoveCount,

    /// X won, but O moved last.
    #[serde(rename = "X must have one more move than O if X wins.")]
    #[display("X must have one more move than O if X wins.")]
    XWinMoveCount,

    /// O won, but X moved last.
    #[serde(rename = "O must have same number of moves as X if O wins.")]
    #[display("O must have same number of moves as X if O wins.")]
    OWinMoveCount,

    /// O won on a full board.
    #[serde(rename = "There must be at least one empty cell if O wins.")]
    #[display("There must be at least one empty cell if O wins.")]
    OWinFullBoard,

    /// Full board with no winner, but O moved last.
    #[serde(rename = "Drawn game must have X with one more move than O.")]
    #[display("Drawn game must have X with one more move than O.")]
    DrawMoveCount,
}

/// Classification of one board snapshot.
///
/// Built once per verification and never changed afterwards.
/// `validity` is present exactly when the board is legal; `cause` is present
/// exactly when the board is illegal or invalid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize, JsonSchema)]
pub struct VerificationResult {
    /// Shape check outcome.
    legality: Legality,
    /// Reachability outcome, for legal boards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    validity: Option<Validity>,
    /// Game outcome, when determinable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    result: Option<GameResult>,
    /// Why the board was rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cause: Option<Cause>,
}

impl VerificationResult {
    /// Board failed shape validation.
    pub(crate) fn illegal() -> Self {
        Self {
            legality: Legality::Illegal,
            validity: None,
            result: None,
            cause: Some(Cause::IllegalShape),
        }
    }

    /// Legal board that cannot be reached by alternating play.
    pub(crate) fn invalid(cause: Cause, result: Option<GameResult>) -> Self {
        Self {
            legality: Legality::Legal,
            validity: Some(Validity::Invalid),
            result,
            cause: Some(cause),
        }
    }

    /// Legal, reachable board.
    pub(crate) fn valid(result: GameResult) -> Self {
        Self {
            legality: Legality::Legal,
            validity: Some(Validity::Valid),
            result: Some(result),
            cause: None,
        }
    }

    /// True for a legal board reachable by alternating play.
    pub fn is_valid(&self) -> bool {
        self.validity == Some(Validity::Valid)
    }
}
