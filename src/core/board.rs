//! Board module - manages the 3x3 grid
//!
//! The board is a flat array of 9 cells in row-major order
//! (index = row * 3 + col), each empty or marked by a player.
//! Index 0 is the top-left cell, index 8 the bottom-right.

use std::fmt;

use crate::types::{Cell, Player, CELL_COUNT};

/// A rejected move. The controller swallows these as silent no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    /// Index outside 0..=8
    OutOfRange(usize),
    /// Cell already holds a mark
    Occupied(usize),
    /// The session has already ended in a win or draw
    GameOver,
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMove::OutOfRange(index) => write!(f, "cell index {index} out of range"),
            IllegalMove::Occupied(index) => write!(f, "cell {index} is already marked"),
            IllegalMove::GameOver => write!(f, "the game is already over"),
        }
    }
}

impl std::error::Error for IllegalMove {}

/// The game board - 9 cells in row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Get cell at the given index
    /// Returns None if out of bounds
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Place a mark for `player` at the given index
    ///
    /// Fails if the index is out of range or the cell is occupied.
    /// On success only that cell changes.
    pub fn place(&mut self, index: usize, player: Player) -> Result<(), IllegalMove> {
        match self.cells.get(index) {
            None => Err(IllegalMove::OutOfRange(index)),
            Some(Some(_)) => Err(IllegalMove::Occupied(index)),
            Some(None) => {
                self.cells[index] = Some(player);
                Ok(())
            }
        }
    }

    /// Check if every cell holds a mark
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Count the cells marked by `player`
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Some(player))
            .count()
    }

    /// Clear all 9 cells
    pub fn reset(&mut self) {
        self.cells = [None; CELL_COUNT];
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Create from a flat array for testing
    #[cfg(test)]
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
