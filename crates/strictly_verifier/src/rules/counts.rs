//! Mark counting.

use super::super::{Board, Cell, Player};
use tracing::instrument;

/// Number of X marks, O marks and empty cells on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MarkCounts {
    /// X marks.
    pub x: usize,
    /// O marks.
    pub o: usize,
    /// Empty cells.
    pub empty: usize,
}

impl MarkCounts {
    /// Counts every cell on the board.
    #[instrument(skip(board), fields(size = board.size()))]
    pub fn of(board: &Board) -> Self {
        board
            .cells()
            .iter()
            .fold(Self::default(), |mut counts, cell| {
                match cell {
                    Cell::Occupied(Player::X) => counts.x += 1,
                    Cell::Occupied(Player::O) => counts.o += 1,
                    Cell::Empty => counts.empty += 1,
                }
                counts
            })
    }

    /// X moves first, so X has as many marks as O or exactly one more.
    pub fn is_alternating(&self) -> bool {
        self.x == self.o || self.x == self.o + 1
    }

    /// True when X has made the last move.
    pub fn x_moved_last(&self) -> bool {
        self.x == self.o + 1
    }

    /// True when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.empty == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Symbols, board_from_rows};

    #[test]
    fn test_counts() {
        let board = board_from_rows(
            &[["X", "O", "X"], ["-", "O", "-"], ["X", "-", "-"]],
            &Symbols::default(),
        )
        .unwrap();
        let counts = MarkCounts::of(&board);
        assert_eq!(counts, MarkCounts { x: 3, o: 2, empty: 4 });
        assert!(counts.is_alternating());
        assert!(counts.x_moved_last());
        assert!(!counts.is_full());
    }

    #[test]
    fn test_alternation_bounds() {
        assert!(MarkCounts { x: 0, o: 0, empty: 9 }.is_alternating());
        assert!(MarkCounts { x: 2, o: 2, empty: 5 }.is_alternating());
        assert!(!MarkCounts { x: 0, o: 1, empty: 0 }.is_alternating());
        assert!(!MarkCounts { x: 3, o: 1, empty: 5 }.is_alternating());
    }

    #[test]
    fn test_full_board() {
        let board = board_from_rows(&[["X", "O"], ["O", "X"]], &Symbols::default()).unwrap();
        assert!(MarkCounts::of(&board).is_full());
    }
}
