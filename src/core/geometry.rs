//! Overlay geometry for the winning line.
//!
//! Given the on-screen rectangles of a winning triple's cells, computes a
//! straight segment spanning them. The segment is rendered from its left
//! edge growing rightward, with the rotation pivot at its left-center, so
//! a rotated segment sweeps outward from its anchor point. All output
//! coordinates are relative to the board rectangle's origin.
//!
//! With screen y growing downward, +45 degrees sweeps down-right (main
//! diagonal) and -45 degrees sweeps up-right (anti diagonal). Both diagonal
//! cases anchor at a cell corner and span corner to corner, so the width is
//! the Euclidean distance between the triple's geometric extremes.

use crate::types::{LineAxis, STROKE_WIDTH};

/// Axis-aligned bounding box of a rendered cell (or the whole board).
///
/// Supplied by the presentation layer per query; the core never caches one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CellRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl CellRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.left + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.top + self.height / 2.0
    }
}

/// A line to render over the winning triple.
///
/// `left`/`top` position the segment's unrotated top-left corner relative
/// to the board origin; rotation pivots around the left edge's center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlaySegment {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub rotation_degrees: f32,
}

/// Compute the overlay segment for a winning line.
///
/// `rects` are the three cells' boxes in the line's triple order (for the
/// anti diagonal that means top-right cell first, bottom-left cell last).
pub fn resolve_overlay(axis: LineAxis, rects: &[CellRect; 3], board: &CellRect) -> OverlaySegment {
    let [first, _, last] = rects;

    match axis {
        LineAxis::Horizontal => OverlaySegment {
            left: first.left - board.left,
            top: first.center_y() - board.top - STROKE_WIDTH / 2.0,
            width: last.right() - first.left,
            height: STROKE_WIDTH,
            rotation_degrees: 0.0,
        },
        LineAxis::Vertical => OverlaySegment {
            left: first.center_x() - board.left - STROKE_WIDTH / 2.0,
            top: first.top - board.top,
            width: STROKE_WIDTH,
            height: last.bottom() - first.top,
            rotation_degrees: 0.0,
        },
        LineAxis::DiagonalMain => {
            // Top-left corner of the first cell to bottom-right corner of
            // the last.
            let span_x = last.right() - first.left;
            let span_y = last.bottom() - first.top;
            OverlaySegment {
                left: first.left - board.left,
                top: first.top - board.top,
                width: span_x.hypot(span_y),
                height: STROKE_WIDTH,
                rotation_degrees: 45.0,
            }
        }
        LineAxis::DiagonalAnti => {
            // Anchored at the bottom-left cell's bottom-left corner (the
            // last cell in triple order), sweeping up-right to the first
            // cell's top-right corner.
            let span_x = first.right() - last.left;
            let span_y = last.bottom() - first.top;
            OverlaySegment {
                left: last.left - board.left,
                top: last.bottom() - board.top,
                width: span_x.hypot(span_y),
                height: STROKE_WIDTH,
                rotation_degrees: -45.0,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn unit_rect(x: f32, y: f32) -> CellRect {
        CellRect::new(x, y, 1.0, 1.0)
    }

    fn origin_board() -> CellRect {
        CellRect::new(0.0, 0.0, 3.0, 3.0)
    }

    #[test]
    fn test_horizontal_spans_row() {
        let rects = [unit_rect(0.0, 0.0), unit_rect(1.0, 0.0), unit_rect(2.0, 0.0)];
        let segment = resolve_overlay(LineAxis::Horizontal, &rects, &origin_board());

        assert!((segment.width - 3.0).abs() < EPSILON);
        assert!((segment.height - STROKE_WIDTH).abs() < EPSILON);
        assert!((segment.left - 0.0).abs() < EPSILON);
        // Anchored at the cells' vertical center, stroke centered on it.
        assert!((segment.top - (0.5 - STROKE_WIDTH / 2.0)).abs() < EPSILON);
        assert_eq!(segment.rotation_degrees, 0.0);
    }

    #[test]
    fn test_vertical_spans_column() {
        let rects = [unit_rect(0.0, 0.0), unit_rect(0.0, 1.0), unit_rect(0.0, 2.0)];
        let segment = resolve_overlay(LineAxis::Vertical, &rects, &origin_board());

        assert!((segment.width - STROKE_WIDTH).abs() < EPSILON);
        assert!((segment.height - 3.0).abs() < EPSILON);
        assert!((segment.left - (0.5 - STROKE_WIDTH / 2.0)).abs() < EPSILON);
        assert!((segment.top - 0.0).abs() < EPSILON);
        assert_eq!(segment.rotation_degrees, 0.0);
    }

    #[test]
    fn test_main_diagonal_corner_to_corner() {
        let rects = [unit_rect(0.0, 0.0), unit_rect(1.0, 1.0), unit_rect(2.0, 2.0)];
        let segment = resolve_overlay(LineAxis::DiagonalMain, &rects, &origin_board());

        // First cell's top-left (0,0) to last cell's bottom-right (3,3).
        assert!((segment.width - 18.0_f32.sqrt()).abs() < EPSILON);
        assert_eq!(segment.rotation_degrees, 45.0);
        assert!((segment.left - 0.0).abs() < EPSILON);
        assert!((segment.top - 0.0).abs() < EPSILON);
    }

    #[test]
    fn test_anti_diagonal_corner_to_corner() {
        // Triple order [2, 4, 6]: top-right cell first, bottom-left last.
        let rects = [unit_rect(2.0, 0.0), unit_rect(1.0, 1.0), unit_rect(0.0, 2.0)];
        let segment = resolve_overlay(LineAxis::DiagonalAnti, &rects, &origin_board());

        // Bottom-left corner (0,3) up to top-right corner (3,0).
        assert!((segment.width - 18.0_f32.sqrt()).abs() < EPSILON);
        assert_eq!(segment.rotation_degrees, -45.0);
        assert!((segment.left - 0.0).abs() < EPSILON);
        assert!((segment.top - 3.0).abs() < EPSILON);
    }

    #[test]
    fn test_anti_diagonal_reaches_opposite_corner() {
        // Walking `width` units along -45 degrees from the anchor must land
        // on the top-right extreme.
        let rects = [unit_rect(2.0, 0.0), unit_rect(1.0, 1.0), unit_rect(0.0, 2.0)];
        let segment = resolve_overlay(LineAxis::DiagonalAnti, &rects, &origin_board());

        let theta = segment.rotation_degrees.to_radians();
        let end_x = segment.left + segment.width * theta.cos();
        let end_y = segment.top + segment.width * theta.sin();
        assert!((end_x - 3.0).abs() < EPSILON);
        assert!((end_y - 0.0).abs() < EPSILON);
    }

    #[test]
    fn test_coordinates_relative_to_board_origin() {
        // Same cells, but the board sits at (10, 20) on screen.
        let board = CellRect::new(10.0, 20.0, 3.0, 3.0);
        let rects = [
            unit_rect(10.0, 20.0),
            unit_rect(11.0, 20.0),
            unit_rect(12.0, 20.0),
        ];
        let segment = resolve_overlay(LineAxis::Horizontal, &rects, &board);

        assert!((segment.left - 0.0).abs() < EPSILON);
        assert!((segment.top - (0.5 - STROKE_WIDTH / 2.0)).abs() < EPSILON);
        assert!((segment.width - 3.0).abs() < EPSILON);
    }
}
