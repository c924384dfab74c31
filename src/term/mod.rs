//! Terminal frontend.
//!
//! Renders the retained board-view state into a simple framebuffer that is
//! flushed to a terminal backend, and owns the grid layout that turns
//! terminal geometry into the cell rectangles the core's overlay math
//! works with.

pub mod board_view;
pub mod fb;
pub mod game_view;
pub mod layout;
pub mod renderer;

pub use board_view::TermBoardView;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::GameView;
pub use layout::{BoardLayout, Viewport};
pub use renderer::TerminalRenderer;
