//! Candidate winning lines: rows, columns and both diagonals.

use super::super::{Board, Cell, Player};
use tracing::instrument;

/// Which part of the board a line runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum LineKind {
    /// Row `i`, left to right.
    #[display("row {}", _0)]
    Row(usize),
    /// Column `j`, top to bottom.
    #[display("column {}", _0)]
    Column(usize),
    /// `cell[i][i]`.
    #[display("main diagonal")]
    MainDiagonal,
    /// `cell[i][N-1-i]`.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

/// A row, column or diagonal of N cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    kind: LineKind,
    cells: Vec<Cell>,
}

impl Line {
    /// Returns where the line runs.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Returns the cells along the line.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// True when every cell on the line holds `player`'s mark.
    pub fn is_won_by(&self, player: Player) -> bool {
        self.cells.iter().all(|cell| *cell == Cell::Occupied(player))
    }

    /// Returns the player holding the whole line, if any.
    pub fn winner(&self) -> Option<Player> {
        let first = self.cells.first()?.player()?;
        self.is_won_by(first).then_some(first)
    }
}

/// Builds all 2N + 2 candidate winning lines for a board.
///
/// Columns are taken as the rows of the transposed board.
#[instrument(skip(board), fields(size = board.size()))]
pub fn winner_lines(board: &Board) -> Vec<Line> {
    let n = board.size();
    let transposed = board.transpose();

    let rows = board.rows().enumerate().map(|(i, row)| Line {
        kind: LineKind::Row(i),
        cells: row.to_vec(),
    });
    let columns = transposed.rows().enumerate().map(|(j, column)| Line {
        kind: LineKind::Column(j),
        cells: column.to_vec(),
    });
    let main = Line {
        kind: LineKind::MainDiagonal,
        cells: (0..n).filter_map(|i| board.get(i, i)).collect(),
    };
    let anti = Line {
        kind: LineKind::AntiDiagonal,
        cells: (0..n).filter_map(|i| board.get(i, n - 1 - i)).collect(),
    };

    rows.chain(columns).chain([main, anti]).collect()
}
