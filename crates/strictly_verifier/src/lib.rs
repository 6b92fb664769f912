//! Strictly Verifier - tic-tac-toe board verification
//!
//! Classifies an N×N board snapshot without move history: is it a legal
//! board, could it arise from alternating play with X moving first, and
//! who (if anyone) has won.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use strictly_verifier::{GameResult, Validity, verify};
//!
//! let verdict = verify(&json!([["X", "O", "-"], ["-", "X", "O"], ["-", "-", "X"]]));
//! assert_eq!(verdict.validity(), &Some(Validity::Valid));
//! assert_eq!(verdict.result(), &Some(GameResult::XWins));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod outcome;
mod rules;
mod shape;
mod types;
mod verifier;

pub use outcome::{Cause, GameResult, Legality, Validity, VerificationResult};
pub use rules::{Line, LineKind, MarkCounts, Winners, winner_lines};
pub use shape::{ShapeError, board_from_rows, validate_shape};
pub use types::{Board, Cell, Player, Symbols};
pub use verifier::{Verifier, verify, verify_board};
