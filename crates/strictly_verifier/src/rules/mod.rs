//! Board rules for verification.
//!
//! Pure functions over a legal [`Board`](crate::Board). Rules are separated
//! from the verifier so each one can be tested on its own.

pub mod counts;
pub mod lines;
pub mod win;

pub use counts::MarkCounts;
pub use lines::{Line, LineKind, winner_lines};
pub use win::Winners;
