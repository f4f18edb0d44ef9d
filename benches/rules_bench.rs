use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use draughtsman::board::{Board, Color, Position};
use draughtsman::rules::{attack, is_legal_move, must_capture, place_piece, remove_piece};

/// Standard opening layout: three rows of pieces per side on the
/// playable cells of an 8x8 board, 12 pieces each.
fn opening_board() -> Board {
    let mut board = Board::new(8, 8).unwrap();
    for row in 0..3 {
        for col in 0..8 {
            if (row + col) % 2 == 0 {
                place_piece(&mut board, Position::new(row, col), Color::White).unwrap();
            }
        }
    }
    for row in 5..8 {
        for col in 0..8 {
            if (row + col) % 2 == 0 {
                place_piece(&mut board, Position::new(row, col), Color::Black).unwrap();
            }
        }
    }
    board
}

/// Opening board with one black piece advanced into jump range.
fn midgame_board() -> Board {
    let mut board = opening_board();
    remove_piece(&mut board, Position::new(5, 3)).unwrap();
    place_piece(&mut board, Position::new(3, 3), Color::Black).unwrap();
    board
}

fn bench_must_capture_opening(c: &mut Criterion) {
    let board = opening_board();
    c.bench_function("must_capture_opening_no_jumps", |b| {
        b.iter(|| must_capture(black_box(&board), black_box(Color::White)))
    });
}

fn bench_must_capture_midgame(c: &mut Criterion) {
    let board = midgame_board();
    c.bench_function("must_capture_with_pending_jump", |b| {
        b.iter(|| must_capture(black_box(&board), black_box(Color::White)))
    });
}

fn bench_move_legality(c: &mut Criterion) {
    let board = opening_board();
    c.bench_function("is_legal_move_front_row", |b| {
        b.iter(|| {
            is_legal_move(
                black_box(&board),
                black_box(Position::new(2, 2)),
                black_box(Position::new(3, 3)),
            )
        })
    });
}

fn bench_attack(c: &mut Criterion) {
    let board = midgame_board();
    c.bench_function("attack_single_jump", |b| {
        b.iter_batched(
            || board.clone(),
            |mut board| {
                attack(
                    &mut board,
                    black_box(Position::new(2, 2)),
                    black_box(Position::new(3, 3)),
                )
                .unwrap()
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_must_capture_opening,
    bench_must_capture_midgame,
    bench_move_legality,
    bench_attack
);
criterion_main!(benches);
