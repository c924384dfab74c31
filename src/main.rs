//! Terminal tic-tac-toe runner (default binary).
//!
//! Click a cell (or use the keypad digits) to place the active player's
//! mark; `r` starts a new game, `q` quits. Uses crossterm for input and a
//! framebuffer-based renderer.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_tictactoe::core::GameSession;
use tui_tictactoe::input::{map_key, map_mouse, UiAction};
use tui_tictactoe::term::{BoardLayout, GameView, TermBoardView, TerminalRenderer, Viewport};

const POLL_INTERVAL_MS: u64 = 50;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = clock_seed();
    let mut session = GameSession::new(seed);

    let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut view = TermBoardView::new(BoardLayout::new(Viewport::new(width, height)));
    session.begin(&mut view);

    let game_view = GameView::default();

    loop {
        let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = game_view.render(&view, Viewport::new(width, height));
        term.draw(&fb)?;

        if !event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match map_key(key) {
                Some(UiAction::Quit) => return Ok(()),
                Some(UiAction::Reset) => session.reset(&mut view),
                Some(UiAction::Activate(index)) => session.activate(index, &mut view),
                None => {}
            },
            Event::Mouse(mouse) => {
                if let Some(UiAction::Activate(index)) = map_mouse(&mouse, view.layout()) {
                    session.activate(index, &mut view);
                }
            }
            Event::Resize(width, height) => {
                view.set_layout(BoardLayout::new(Viewport::new(width, height)));
                term.invalidate();
            }
            _ => {}
        }
    }
}

/// Seed the starting-player coin flip from the wall clock.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
