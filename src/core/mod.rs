//! Core module - pure game logic with no external dependencies
//!
//! Game rules, win detection, and overlay geometry. It has zero dependencies
//! on UI, input devices, or I/O; the presentation layer is reached only
//! through the `BoardView` trait.

pub mod board;
pub mod game;
pub mod geometry;
pub mod lines;
pub mod rng;
pub mod view;

// Re-export commonly used types
pub use board::{Board, IllegalMove};
pub use game::GameSession;
pub use geometry::{resolve_overlay, CellRect, OverlaySegment};
pub use lines::{evaluate, WIN_LINES};
pub use rng::SimpleRng;
pub use view::BoardView;
