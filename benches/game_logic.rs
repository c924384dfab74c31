use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tui_tictactoe::core::{
    evaluate, resolve_overlay, Board, BoardView, CellRect, GameSession, OverlaySegment,
};
use tui_tictactoe::types::{Cell, LineAxis, Player};

/// View that swallows render instructions and serves unit-square geometry.
struct NullView;

impl BoardView for NullView {
    fn render_mark(&mut self, _index: usize, _mark: Cell) {}
    fn render_status(&mut self, _text: &str) {}
    fn render_win_overlay(&mut self, _segment: OverlaySegment) {}
    fn clear_win_overlay(&mut self) {}

    fn cell_rect(&self, index: usize) -> CellRect {
        CellRect::new((index % 3) as f32, (index / 3) as f32, 1.0, 1.0)
    }

    fn board_rect(&self) -> CellRect {
        CellRect::new(0.0, 0.0, 3.0, 3.0)
    }
}

fn bench_evaluate(c: &mut Criterion) {
    // Worst case: no line, full table scan.
    let mut board = Board::new();
    for (index, player) in [
        (0, Player::X),
        (1, Player::O),
        (2, Player::X),
        (3, Player::X),
        (4, Player::O),
        (5, Player::O),
        (6, Player::O),
        (7, Player::X),
    ] {
        board.place(index, player).unwrap();
    }

    c.bench_function("evaluate_no_win", |b| {
        b.iter(|| evaluate(black_box(&board), black_box(Player::X)))
    });
}

fn bench_resolve_overlay(c: &mut Criterion) {
    let rects = [
        CellRect::new(2.0, 0.0, 1.0, 1.0),
        CellRect::new(1.0, 1.0, 1.0, 1.0),
        CellRect::new(0.0, 2.0, 1.0, 1.0),
    ];
    let board = CellRect::new(0.0, 0.0, 3.0, 3.0);

    c.bench_function("resolve_anti_diagonal", |b| {
        b.iter(|| resolve_overlay(black_box(LineAxis::DiagonalAnti), &rects, &board))
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("full_game_top_row_win", |b| {
        b.iter(|| {
            let mut session = GameSession::new(black_box(12345));
            let mut view = NullView;
            for index in [0, 3, 1, 4, 2] {
                session.activate(index, &mut view);
            }
            session.phase()
        })
    });
}

criterion_group!(benches, bench_evaluate, bench_resolve_overlay, bench_full_game);
criterion_main!(benches);
