//! Terminal-side implementation of the core's `BoardView` contract.
//!
//! Retains whatever the controller instructed it to show (marks, status
//! text, overlay) the way a DOM holds rendered elements, and answers
//! geometry queries from the current `BoardLayout`. Drawing happens later,
//! in `GameView::render`.

use crate::core::{BoardView, CellRect, OverlaySegment};
use crate::term::layout::BoardLayout;
use crate::types::{Cell, CELL_COUNT};

#[derive(Debug, Clone)]
pub struct TermBoardView {
    layout: BoardLayout,
    marks: [Cell; CELL_COUNT],
    status: String,
    overlay: Option<OverlaySegment>,
}

impl TermBoardView {
    pub fn new(layout: BoardLayout) -> Self {
        Self {
            layout,
            marks: [None; CELL_COUNT],
            status: String::new(),
            overlay: None,
        }
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// Swap in a new layout after a terminal resize.
    ///
    /// The overlay stays valid: its coordinates are relative to the board
    /// rect and cell strides are constant, only the origin moves.
    pub fn set_layout(&mut self, layout: BoardLayout) {
        self.layout = layout;
    }

    pub fn marks(&self) -> &[Cell; CELL_COUNT] {
        &self.marks
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn overlay(&self) -> Option<&OverlaySegment> {
        self.overlay.as_ref()
    }
}

impl BoardView for TermBoardView {
    fn render_mark(&mut self, index: usize, mark: Cell) {
        if let Some(slot) = self.marks.get_mut(index) {
            *slot = mark;
        }
    }

    fn render_status(&mut self, text: &str) {
        self.status.clear();
        self.status.push_str(text);
    }

    fn render_win_overlay(&mut self, segment: OverlaySegment) {
        self.overlay = Some(segment);
    }

    fn clear_win_overlay(&mut self) {
        self.overlay = None;
    }

    fn cell_rect(&self, index: usize) -> CellRect {
        self.layout.cell_rect(index)
    }

    fn board_rect(&self) -> CellRect {
        self.layout.board_rect()
    }
}
