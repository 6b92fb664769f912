//! Win detection over all candidate lines.

use super::super::{Board, Player};
use super::lines::{LineKind, winner_lines};
use tracing::{debug, instrument};

/// Lines held completely by each player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Winners {
    x: Vec<LineKind>,
    o: Vec<LineKind>,
}

impl Winners {
    /// Scans every row, column and diagonal of the board.
    #[instrument(skip(board), fields(size = board.size()))]
    pub fn find(board: &Board) -> Self {
        let mut winners = Self::default();
        for line in winner_lines(board) {
            match line.winner() {
                Some(Player::X) => winners.x.push(line.kind()),
                Some(Player::O) => winners.o.push(line.kind()),
                None => {}
            }
        }
        debug!(x_lines = ?winners.x, o_lines = ?winners.o, "Winning lines found");
        winners
    }

    /// Lines completed by `player`.
    pub fn lines(&self, player: Player) -> &[LineKind] {
        match player {
            Player::X => &self.x,
            Player::O => &self.o,
        }
    }

    /// True when `player` completed at least one line.
    pub fn has_won(&self, player: Player) -> bool {
        !self.lines(player).is_empty()
    }

    /// True when X completed at least one line.
    pub fn x_won(&self) -> bool {
        self.has_won(Player::X)
    }

    /// True when O completed at least one line.
    pub fn o_won(&self) -> bool {
        self.has_won(Player::O)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Symbols, board_from_rows};

    fn winners(rows: &[[&str; 3]; 3]) -> Winners {
        Winners::find(&board_from_rows(rows, &Symbols::default()).unwrap())
    }

    #[test]
    fn test_no_winner_empty_board() {
        let w = winners(&[["-", "-", "-"], ["-", "-", "-"], ["-", "-", "-"]]);
        assert!(!w.x_won());
        assert!(!w.o_won());
    }

    #[test]
    fn test_winner_top_row() {
        let w = winners(&[["X", "X", "X"], ["O", "O", "-"], ["-", "-", "-"]]);
        assert_eq!(w.lines(Player::X), &[LineKind::Row(0)]);
        assert!(!w.o_won());
    }

    #[test]
    fn test_winner_diagonal() {
        let w = winners(&[["O", "X", "-"], ["X", "O", "-"], ["X", "-", "O"]]);
        assert_eq!(w.lines(Player::O), &[LineKind::MainDiagonal]);
    }

    #[test]
    fn test_both_players_win() {
        let w = winners(&[["X", "X", "X"], ["O", "O", "O"], ["-", "-", "-"]]);
        assert!(w.x_won());
        assert!(w.o_won());
    }

    #[test]
    fn test_double_line_win() {
        let w = winners(&[["X", "X", "X"], ["O", "X", "O"], ["O", "O", "X"]]);
        assert_eq!(w.lines(Player::X), &[LineKind::Row(0), LineKind::MainDiagonal]);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let w = winners(&[["X", "X", "-"], ["-", "-", "-"], ["-", "-", "-"]]);
        assert!(!w.has_won(Player::X));
    }
}
