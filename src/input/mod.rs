//! Input mapping for terminal environments.
//!
//! Keys use the keypad arrangement (7-8-9 is the top row, 1-2-3 the
//! bottom), so the digits lay out like the grid. Mouse clicks are resolved
//! against the board layout.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::term::BoardLayout;
use crate::types::GRID_SIDE;

/// What the player asked the UI to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Activate (mark) the cell at this index.
    Activate(usize),
    /// Start a new game.
    Reset,
    /// Leave the program.
    Quit,
}

/// Map a key press to an action.
pub fn map_key(key: KeyEvent) -> Option<UiAction> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(UiAction::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(UiAction::Quit),
        KeyCode::Char('r') => Some(UiAction::Reset),
        KeyCode::Char(ch @ '1'..='9') => {
            // Keypad digit -> row-major cell index, top row first.
            let digit = ch as usize - '1' as usize;
            let row = 2 - digit / GRID_SIDE;
            let col = digit % GRID_SIDE;
            Some(UiAction::Activate(row * GRID_SIDE + col))
        }
        _ => None,
    }
}

/// Map a mouse event to an action (left press on a cell activates it).
pub fn map_mouse(event: &MouseEvent, layout: &BoardLayout) -> Option<UiAction> {
    if event.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    layout
        .hit_test(event.column, event.row)
        .map(UiAction::Activate)
}
