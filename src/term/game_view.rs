//! GameView: maps a `TermBoardView` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::OverlaySegment;
use crate::term::board_view::TermBoardView;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::term::layout::{
    BoardLayout, Viewport, CELL_COLS, CELL_ROWS, GAP_COLS, GAP_ROWS, ROW_UNITS,
};
use crate::types::{Player, CELL_COUNT, GRID_SIDE};

/// Renders the grid, marks, status line, and win overlay.
pub struct GameView {
    grid_style: CellStyle,
    status_style: CellStyle,
    overlay_style: CellStyle,
    x_style: CellStyle,
    o_style: CellStyle,
}

impl Default for GameView {
    fn default() -> Self {
        let base = CellStyle::default();
        Self {
            grid_style: CellStyle {
                fg: Rgb::new(120, 120, 130),
                ..base
            },
            status_style: CellStyle { bold: true, ..base },
            overlay_style: CellStyle {
                fg: Rgb::new(255, 255, 255),
                bold: true,
                ..base
            },
            x_style: CellStyle {
                fg: Rgb::new(120, 200, 255),
                bold: true,
                ..base
            },
            o_style: CellStyle {
                fg: Rgb::new(255, 180, 120),
                bold: true,
                ..base
            },
        }
    }
}

impl GameView {
    /// Render the retained view state into a framebuffer.
    pub fn render(&self, view: &TermBoardView, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = view.layout();
        self.draw_grid(&mut fb, layout);
        self.draw_marks(&mut fb, view, layout);
        if let Some(segment) = view.overlay() {
            self.draw_overlay(&mut fb, layout, segment);
        }
        self.draw_status(&mut fb, view, layout, viewport);

        fb
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, layout: &BoardLayout) {
        let (frame_w, frame_h) = BoardLayout::frame_size();
        let (x0, y0) = layout.cell_origin(0);

        // Vertical separators in the first gap column after grid columns 0/1.
        for col in 1..GRID_SIDE as u16 {
            let x = x0 + col * (CELL_COLS + GAP_COLS) - GAP_COLS;
            for y in y0..y0 + frame_h {
                fb.put_char(x, y, '║', self.grid_style);
            }
        }

        // Horizontal separators in the gap row below grid rows 0/1.
        for row in 1..GRID_SIDE as u16 {
            let y = y0 + row * (CELL_ROWS + GAP_ROWS) - GAP_ROWS;
            for x in x0..x0 + frame_w {
                let ch = if fb.get(x, y).map(|c| c.ch) == Some('║') {
                    '╬'
                } else {
                    '═'
                };
                fb.put_char(x, y, ch, self.grid_style);
            }
        }
    }

    fn draw_marks(&self, fb: &mut FrameBuffer, view: &TermBoardView, layout: &BoardLayout) {
        for index in 0..CELL_COUNT {
            let Some(player) = view.marks()[index] else {
                continue;
            };
            let (x, y) = layout.cell_origin(index);
            let (glyph, style) = match player {
                Player::X => ('X', self.x_style),
                Player::O => ('O', self.o_style),
            };
            fb.put_char(x + CELL_COLS / 2, y + CELL_ROWS / 2, glyph, style);
        }
    }

    /// Plot the overlay segment by stepping along its rotation vector.
    ///
    /// The segment lives in layout units relative to the board origin; each
    /// sampled point converts back to a terminal cell (rows are 2 units)
    /// and is clamped into the grid frame. Stroke thickness collapses to
    /// one character.
    fn draw_overlay(&self, fb: &mut FrameBuffer, layout: &BoardLayout, segment: &OverlaySegment) {
        let board = layout.board_rect();
        let (x0, y0) = layout.cell_origin(0);
        let (frame_w, frame_h) = BoardLayout::frame_size();

        let plot = |fb: &mut FrameBuffer, x: f32, y: f32, glyph: char| {
            let column = (x.floor() as u16).clamp(x0, x0 + frame_w - 1);
            let row = (((y / ROW_UNITS).floor()) as u16).clamp(y0, y0 + frame_h - 1);
            fb.put_char(column, row, glyph, self.overlay_style);
        };

        // A zero-rotation segment that is taller than wide is a vertical
        // stroke; everything else grows rightward from its left edge.
        if segment.rotation_degrees == 0.0 && segment.height > segment.width {
            let x = board.left + segment.left + segment.width / 2.0;
            let mut t = 0.0;
            while t <= segment.height {
                plot(fb, x, board.top + segment.top + t, '┃');
                t += 1.0;
            }
            return;
        }

        let theta = segment.rotation_degrees.to_radians();
        let (dir_x, dir_y) = (theta.cos(), theta.sin());
        let glyph = if segment.rotation_degrees > 10.0 {
            '╲'
        } else if segment.rotation_degrees < -10.0 {
            '╱'
        } else {
            '━'
        };

        // Axis-aligned strokes run along their vertical center; diagonal
        // strokes anchor exactly on the corner so the sampled path passes
        // through the cell centers.
        let start_y = if segment.rotation_degrees == 0.0 {
            segment.top + segment.height / 2.0
        } else {
            segment.top
        };

        let mut t = 0.0;
        while t <= segment.width {
            let x = board.left + segment.left + t * dir_x;
            let y = board.top + start_y + t * dir_y;
            plot(fb, x, y, glyph);
            t += 0.5;
        }
    }

    fn draw_status(
        &self,
        fb: &mut FrameBuffer,
        view: &TermBoardView,
        layout: &BoardLayout,
        viewport: Viewport,
    ) {
        let status = view.status();
        let x = viewport.width.saturating_sub(status.chars().count() as u16) / 2;
        fb.put_str(x, layout.status_row(), status, self.status_style);

        let help = "click or 1-9 to place, r to reset, q to quit";
        let hx = viewport.width.saturating_sub(help.len() as u16) / 2;
        fb.put_str(hx, viewport.height.saturating_sub(1), help, self.grid_style);
    }
}
