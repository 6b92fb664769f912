//! Core domain types for board verification.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player's mark.
    Occupied(Player),
}

impl Cell {
    /// Returns the player occupying this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// Textual spelling of the three cell values at the input boundary.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Symbols {
    /// Symbol for an X mark.
    x: String,
    /// Symbol for an O mark.
    o: String,
    /// Symbol for an empty cell.
    empty: String,
}

impl Symbols {
    /// Creates a symbol set.
    ///
    /// Symbols are not checked here; see [`Symbols::conflict`].
    pub fn new(x: impl Into<String>, o: impl Into<String>, empty: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            o: o.into(),
            empty: empty.into(),
        }
    }

    /// Describes why this symbol set is unusable, if it is.
    ///
    /// All three symbols must be non-empty and pairwise distinct.
    #[instrument]
    pub fn conflict(&self) -> Option<String> {
        for (name, symbol) in [("x", &self.x), ("o", &self.o), ("empty", &self.empty)] {
            if symbol.is_empty() {
                return Some(format!("symbol for {} must not be empty", name));
            }
        }
        if self.x == self.o || self.x == self.empty || self.o == self.empty {
            return Some(format!(
                "symbols must be distinct (x = {:?}, o = {:?}, empty = {:?})",
                self.x, self.o, self.empty
            ));
        }
        None
    }

    /// Parses one symbol into a cell.
    pub fn parse(&self, symbol: &str) -> Option<Cell> {
        if symbol == self.x {
            Some(Cell::Occupied(Player::X))
        } else if symbol == self.o {
            Some(Cell::Occupied(Player::O))
        } else if symbol == self.empty {
            Some(Cell::Empty)
        } else {
            None
        }
    }

    /// Returns the symbol spelling a cell.
    pub fn symbol(&self, cell: Cell) -> &str {
        match cell {
            Cell::Empty => &self.empty,
            Cell::Occupied(Player::X) => &self.x,
            Cell::Occupied(Player::O) => &self.o,
        }
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self::new("X", "O", "-")
    }
}

/// Square N×N board, N ≥ 1.
///
/// Built only through shape validation, so a `Board` is always legal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Side length.
    size: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a board from already-typed cells. Caller guarantees `cells.len() == size * size`.
    pub(crate) fn from_cells(size: usize, cells: Vec<Cell>) -> Self {
        debug_assert!(size >= 1 && cells.len() == size * size);
        Self { size, cells }
    }

    /// Returns the side length N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the cell at (row, column).
    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        if row >= self.size || column >= self.size {
            return None;
        }
        self.cells.get(row * self.size + column).copied()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Returns the board with rows and columns swapped.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn transpose(&self) -> Self {
        let n = self.size;
        let cells = (0..n * n)
            .map(|i| self.cells[(i % n) * n + i / n])
            .collect();
        Self { size: n, cells }
    }

    /// Formats the board with the given symbols, one row per line.
    pub fn render(&self, symbols: &Symbols) -> String {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|cell| symbols.symbol(*cell))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(&Symbols::default()))
    }
}
