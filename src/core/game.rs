//! Game session module - the turn state machine
//!
//! Owns the board, the phase, and the active player for one session.
//! Every activation runs synchronously to completion: validate, place,
//! evaluate, then push render instructions through the `BoardView`.
//! Rejected moves are silent no-ops, matching the tolerance a casual game
//! has for stray clicks.

use crate::core::{evaluate, resolve_overlay, Board, BoardView, IllegalMove, SimpleRng};
use crate::types::{GamePhase, Player, CELL_COUNT};

/// One in-memory tic-tac-toe session.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    phase: GamePhase,
    active: Player,
    rng: SimpleRng,
}

impl GameSession {
    /// Create a session with the given RNG seed.
    ///
    /// The seed decides the starting player, so tests can fix it.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let active = if rng.coin_flip() { Player::X } else { Player::O };
        Self {
            board: Board::new(),
            phase: GamePhase::InProgress,
            active,
            rng,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn active_player(&self) -> Player {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Announce the opening turn on a fresh session.
    pub fn begin(&self, view: &mut dyn BoardView) {
        view.render_status(&format!("{}'s Turn", self.active));
    }

    /// A cell was activated (clicked). Invalid activations are ignored.
    pub fn activate(&mut self, index: usize, view: &mut dyn BoardView) {
        let _ = self.try_activate(index, view);
    }

    fn try_activate(&mut self, index: usize, view: &mut dyn BoardView) -> Result<(), IllegalMove> {
        if self.phase.is_over() {
            return Err(IllegalMove::GameOver);
        }

        self.board.place(index, self.active)?;
        view.render_mark(index, Some(self.active));

        match evaluate(&self.board, self.active) {
            GamePhase::Won { winner, line } => {
                self.phase = GamePhase::Won { winner, line };
                let rects = [
                    view.cell_rect(line.cells[0]),
                    view.cell_rect(line.cells[1]),
                    view.cell_rect(line.cells[2]),
                ];
                let segment = resolve_overlay(line.axis, &rects, &view.board_rect());
                view.clear_win_overlay();
                view.render_win_overlay(segment);
                view.render_status(&format!("{winner} Wins!"));
            }
            GamePhase::Draw => {
                self.phase = GamePhase::Draw;
                view.render_status("It's a Draw!");
            }
            GamePhase::InProgress => {
                self.active = self.active.other();
                view.render_status(&format!("{}'s Turn", self.active));
            }
        }

        Ok(())
    }

    /// Start over: empty board, fresh coin flip, no overlay.
    pub fn reset(&mut self, view: &mut dyn BoardView) {
        self.board.reset();
        self.phase = GamePhase::InProgress;
        self.active = if self.rng.coin_flip() { Player::X } else { Player::O };

        for index in 0..CELL_COUNT {
            view.render_mark(index, None);
        }
        view.clear_win_overlay();
        view.render_status(&format!("{}'s Turn", self.active));
    }
}
