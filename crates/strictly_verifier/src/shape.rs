//! Shape validation at the input boundary.
//!
//! Candidate boards arrive as untyped values. This module is the only place
//! raw symbols are inspected; everything past it works on [`Cell`]s.

use super::types::{Board, Cell, Symbols};
use derive_more::{Display, Error};
use serde_json::Value;
use tracing::{debug, instrument};

/// Reason a candidate value is not a legal board.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ShapeError {
    /// The candidate is not an array of rows.
    #[display("Board must be an array of rows")]
    NotASequence,

    /// The candidate has no rows.
    #[display("Board must have at least one row")]
    Empty,

    /// A row is not an array of cells.
    #[display("Row {} is not an array of cells", row)]
    RowNotASequence {
        /// Row index.
        row: usize,
    },

    /// A row's length differs from the number of rows.
    #[display("Row {} has {} cells, expected {}", row, found, expected)]
    RowLength {
        /// Row index.
        row: usize,
        /// Number of rows on the board.
        expected: usize,
        /// Cells found in this row.
        found: usize,
    },

    /// A cell is not one of the permitted symbols.
    #[display("Cell ({}, {}) holds illegal value {}", row, column, value)]
    IllegalCell {
        /// Row index.
        row: usize,
        /// Column index.
        column: usize,
        /// The offending value, as JSON text.
        value: String,
    },
}

/// Validates that a candidate value is a non-empty square grid of known symbols.
///
/// Returns the typed board on success.
#[instrument(skip(candidate))]
pub fn validate_shape(candidate: &Value, symbols: &Symbols) -> Result<Board, ShapeError> {
    let rows = candidate.as_array().ok_or(ShapeError::NotASequence)?;
    let n = rows.len();
    if n == 0 {
        return Err(ShapeError::Empty);
    }

    let mut cells = Vec::new();
    for (row, value) in rows.iter().enumerate() {
        let columns = value
            .as_array()
            .ok_or(ShapeError::RowNotASequence { row })?;
        if columns.len() != n {
            return Err(ShapeError::RowLength {
                row,
                expected: n,
                found: columns.len(),
            });
        }
        for (column, value) in columns.iter().enumerate() {
            let cell = value
                .as_str()
                .and_then(|symbol| symbols.parse(symbol))
                .ok_or_else(|| ShapeError::IllegalCell {
                    row,
                    column,
                    value: value.to_string(),
                })?;
            cells.push(cell);
        }
    }

    debug!(size = n, "Board shape is legal");
    Ok(Board::from_cells(n, cells))
}

/// Validates in-memory rows of symbols with the same rules as [`validate_shape`].
#[instrument(skip(rows))]
pub fn board_from_rows<R, S>(rows: &[R], symbols: &Symbols) -> Result<Board, ShapeError>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let n = rows.len();
    if n == 0 {
        return Err(ShapeError::Empty);
    }

    let mut cells: Vec<Cell> = Vec::new();
    for (row, columns) in rows.iter().enumerate() {
        let columns = columns.as_ref();
        if columns.len() != n {
            return Err(ShapeError::RowLength {
                row,
                expected: n,
                found: columns.len(),
            });
        }
        for (column, symbol) in columns.iter().enumerate() {
            let symbol = symbol.as_ref();
            let cell = symbols
                .parse(symbol)
                .ok_or_else(|| ShapeError::IllegalCell {
                    row,
                    column,
                    value: format!("{:?}", symbol),
                })?;
            cells.push(cell);
        }
    }

    Ok(Board::from_cells(n, cells))
}
