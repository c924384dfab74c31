//! Core types shared across the application
//! This module contains pure data types with no external dependencies

use std::fmt;

/// Cells per side of the grid
pub const GRID_SIDE: usize = 3;

/// Total number of cells on the board
pub const CELL_COUNT: usize = GRID_SIDE * GRID_SIDE;

/// Visual thickness of the winning-line overlay, in layout units
pub const STROKE_WIDTH: f32 = 5.0;

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The opponent of this player
    pub fn other(&self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cell on the board (None = empty, Some = marked by a player)
pub type Cell = Option<Player>;

/// Geometry class of a winning line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAxis {
    /// Three cells in one row
    Horizontal,
    /// Three cells in one column
    Vertical,
    /// Top-left to bottom-right
    DiagonalMain,
    /// Top-right to bottom-left
    DiagonalAnti,
}

/// One of the 8 fixed index triples that constitutes a win
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinLine {
    /// Cell indices in table order (first, middle, last)
    pub cells: [usize; 3],
    pub axis: LineAxis,
}

/// Lifecycle of one game session
///
/// Starts `InProgress`, transitions at most once to `Won` or `Draw`, then
/// stays there until reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    InProgress,
    Won { winner: Player, line: WinLine },
    Draw,
}

impl GamePhase {
    pub fn is_over(&self) -> bool {
        !matches!(self, GamePhase::InProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_other_flips() {
        assert_eq!(Player::X.other(), Player::O);
        assert_eq!(Player::O.other(), Player::X);
    }

    #[test]
    fn test_player_display() {
        assert_eq!(Player::X.to_string(), "X");
        assert_eq!(Player::O.to_string(), "O");
    }

    #[test]
    fn test_phase_is_over() {
        assert!(!GamePhase::InProgress.is_over());
        assert!(GamePhase::Draw.is_over());
        let won = GamePhase::Won {
            winner: Player::X,
            line: WinLine {
                cells: [0, 1, 2],
                axis: LineAxis::Horizontal,
            },
        };
        assert!(won.is_over());
    }
}
