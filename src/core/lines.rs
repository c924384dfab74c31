//! Win/draw evaluation over the 8 fixed winning lines.
//!
//! The line table is static: 3 horizontals top-to-bottom, 3 verticals
//! left-to-right, then the main and anti diagonals. `evaluate` scans it in
//! that order, so a caller that somehow produced two complete lines still
//! gets a deterministic answer (the first match).

use crate::core::Board;
use crate::types::{GamePhase, LineAxis, Player, WinLine};

/// All winning triples, in fixed enumeration order.
pub const WIN_LINES: [WinLine; 8] = [
    WinLine {
        cells: [0, 1, 2],
        axis: LineAxis::Horizontal,
    },
    WinLine {
        cells: [3, 4, 5],
        axis: LineAxis::Horizontal,
    },
    WinLine {
        cells: [6, 7, 8],
        axis: LineAxis::Horizontal,
    },
    WinLine {
        cells: [0, 3, 6],
        axis: LineAxis::Vertical,
    },
    WinLine {
        cells: [1, 4, 7],
        axis: LineAxis::Vertical,
    },
    WinLine {
        cells: [2, 5, 8],
        axis: LineAxis::Vertical,
    },
    WinLine {
        cells: [0, 4, 8],
        axis: LineAxis::DiagonalMain,
    },
    WinLine {
        cells: [2, 4, 6],
        axis: LineAxis::DiagonalAnti,
    },
];

/// Determine the outcome for `player` on the given board.
///
/// Returns `Won` with the first fully-marked line in table order, else
/// `Draw` when the board is full, else `InProgress`. A full board with a
/// winning line reports the win; the win check runs first.
pub fn evaluate(board: &Board, player: Player) -> GamePhase {
    for line in WIN_LINES {
        let marked = line
            .cells
            .iter()
            .all(|&index| board.get(index) == Some(Some(player)));
        if marked {
            return GamePhase::Won {
                winner: player,
                line,
            };
        }
    }

    if board.is_full() {
        GamePhase::Draw
    } else {
        GamePhase::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(marks: [Option<Player>; 9]) -> Board {
        Board::from_cells(marks)
    }

    const X: Option<Player> = Some(Player::X);
    const O: Option<Player> = Some(Player::O);
    const E: Option<Player> = None;

    #[test]
    fn test_top_row_win() {
        let board = board_from([X, X, X, O, O, E, E, E, E]);
        assert_eq!(
            evaluate(&board, Player::X),
            GamePhase::Won {
                winner: Player::X,
                line: WIN_LINES[0],
            }
        );
    }

    #[test]
    fn test_no_win_for_other_player() {
        let board = board_from([X, X, X, O, O, E, E, E, E]);
        assert_eq!(evaluate(&board, Player::O), GamePhase::InProgress);
    }

    #[test]
    fn test_column_win() {
        let board = board_from([O, X, E, O, X, E, O, E, E]);
        assert_eq!(
            evaluate(&board, Player::O),
            GamePhase::Won {
                winner: Player::O,
                line: WIN_LINES[3],
            }
        );
    }

    #[test]
    fn test_main_diagonal_win() {
        let board = board_from([X, O, E, O, X, E, E, E, X]);
        let phase = evaluate(&board, Player::X);
        assert_eq!(
            phase,
            GamePhase::Won {
                winner: Player::X,
                line: WIN_LINES[6],
            }
        );
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = board_from([O, E, X, O, X, E, X, E, E]);
        assert_eq!(
            evaluate(&board, Player::X),
            GamePhase::Won {
                winner: Player::X,
                line: WIN_LINES[7],
            }
        );
    }

    #[test]
    fn test_full_board_no_line_is_draw() {
        // X O X / X O O / O X X has no three-in-a-row.
        let board = board_from([X, O, X, X, O, O, O, X, X]);
        assert!(board.is_full());
        assert_eq!(evaluate(&board, Player::X), GamePhase::Draw);
        assert_eq!(evaluate(&board, Player::O), GamePhase::Draw);
    }

    #[test]
    fn test_win_beats_draw_on_full_board() {
        // Full board where X completed the bottom row last.
        let board = board_from([O, X, O, O, O, X, X, X, X]);
        assert!(board.is_full());
        assert_eq!(
            evaluate(&board, Player::X),
            GamePhase::Won {
                winner: Player::X,
                line: WIN_LINES[2],
            }
        );
    }

    #[test]
    fn test_first_match_in_table_order() {
        // Degenerate board with two complete X lines (row 0 and column 0).
        // Not reachable in driven play; the evaluator must still pick the
        // first line in enumeration order.
        let board = board_from([X, X, X, X, E, E, X, E, E]);
        assert_eq!(
            evaluate(&board, Player::X),
            GamePhase::Won {
                winner: Player::X,
                line: WIN_LINES[0],
            }
        );
    }

    #[test]
    fn test_empty_board_in_progress() {
        let board = Board::new();
        assert_eq!(evaluate(&board, Player::X), GamePhase::InProgress);
    }
}
