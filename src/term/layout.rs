//! Board layout: assigns on-screen rectangles to the 9 cells.
//!
//! Rect coordinates use layout units, not raw terminal cells: 1 column is
//! 1 unit and 1 row is 2 units, compensating for the typical glyph aspect
//! ratio so each board cell is geometrically square (6x6 units) and
//! diagonal overlays render at a visual 45 degrees. Strides are equal on
//! both axes: 8 columns between cell origins, 4 rows (8 units).

use crate::core::CellRect;
use crate::types::GRID_SIDE;

/// Board cell size in terminal columns/rows.
pub const CELL_COLS: u16 = 6;
pub const CELL_ROWS: u16 = 3;

/// Gap between cells: 2 columns, 1 row (equal in units).
pub const GAP_COLS: u16 = 2;
pub const GAP_ROWS: u16 = 1;

/// Vertical units per terminal row.
pub const ROW_UNITS: f32 = 2.0;

const COL_STRIDE: u16 = CELL_COLS + GAP_COLS;
const ROW_STRIDE: u16 = CELL_ROWS + GAP_ROWS;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Placement of the 3x3 grid inside a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    origin_x: u16,
    origin_y: u16,
}

impl BoardLayout {
    /// Center the board in the viewport, reserving two rows below it for
    /// the status line.
    pub fn new(viewport: Viewport) -> Self {
        let (frame_w, frame_h) = Self::frame_size();
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h + 2) / 2;
        Self { origin_x, origin_y }
    }

    /// Board footprint in terminal cells (columns, rows).
    pub fn frame_size() -> (u16, u16) {
        let cols = GRID_SIDE as u16 * CELL_COLS + (GRID_SIDE as u16 - 1) * GAP_COLS;
        let rows = GRID_SIDE as u16 * CELL_ROWS + (GRID_SIDE as u16 - 1) * GAP_ROWS;
        (cols, rows)
    }

    /// Terminal position of a cell's top-left corner.
    pub fn cell_origin(&self, index: usize) -> (u16, u16) {
        let col = (index % GRID_SIDE) as u16;
        let row = (index / GRID_SIDE) as u16;
        (
            self.origin_x + col * COL_STRIDE,
            self.origin_y + row * ROW_STRIDE,
        )
    }

    /// Bounding box of a cell in layout units.
    pub fn cell_rect(&self, index: usize) -> CellRect {
        let (x, y) = self.cell_origin(index);
        CellRect::new(
            x as f32,
            y as f32 * ROW_UNITS,
            CELL_COLS as f32,
            CELL_ROWS as f32 * ROW_UNITS,
        )
    }

    /// Bounding box of the whole grid in layout units.
    pub fn board_rect(&self) -> CellRect {
        let (cols, rows) = Self::frame_size();
        CellRect::new(
            self.origin_x as f32,
            self.origin_y as f32 * ROW_UNITS,
            cols as f32,
            rows as f32 * ROW_UNITS,
        )
    }

    /// Terminal row for the status line (below the grid).
    pub fn status_row(&self) -> u16 {
        let (_, rows) = Self::frame_size();
        self.origin_y + rows + 1
    }

    /// Map a terminal position (e.g. a mouse click) to a cell index.
    ///
    /// Positions on the gaps between cells miss.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        let dx = column.checked_sub(self.origin_x)?;
        let dy = row.checked_sub(self.origin_y)?;

        let cell_col = dx / COL_STRIDE;
        let cell_row = dy / ROW_STRIDE;
        if cell_col >= GRID_SIDE as u16 || cell_row >= GRID_SIDE as u16 {
            return None;
        }
        if dx % COL_STRIDE >= CELL_COLS || dy % ROW_STRIDE >= CELL_ROWS {
            return None;
        }

        Some((cell_row as usize) * GRID_SIDE + cell_col as usize)
    }
}
