//! The presentation contract between the game core and a frontend.

use crate::core::geometry::{CellRect, OverlaySegment};
use crate::types::Cell;

/// Render instructions and geometry queries the core drives a frontend with.
///
/// The frontend owns all display state; the core only pushes instructions
/// and asks for cell geometry when it needs to place the win overlay.
/// Rect answers are consumed immediately and never cached.
pub trait BoardView {
    /// Show `mark` in the given cell (`None` clears it).
    fn render_mark(&mut self, index: usize, mark: Cell);

    /// Replace the status label text.
    fn render_status(&mut self, text: &str);

    /// Draw the winning-line overlay. At most one overlay exists at a time;
    /// the core clears before drawing a new one.
    fn render_win_overlay(&mut self, segment: OverlaySegment);

    /// Remove any rendered overlay.
    fn clear_win_overlay(&mut self);

    /// Bounding box of a cell, in the frontend's coordinate space.
    fn cell_rect(&self, index: usize) -> CellRect;

    /// Bounding box of the whole board, in the same space.
    fn board_rect(&self) -> CellRect;
}
