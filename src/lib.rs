//! Terminal tic-tac-toe.
//!
//! `core` holds the game rules, win detection, and overlay geometry with no
//! dependency on any rendering technology. `term` is the terminal frontend
//! (framebuffer, board layout, crossterm flushing). `input` maps key and
//! mouse events to game actions.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
