use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_blockfall::core::{Board, Grid, PieceFactory};
use tui_blockfall::types::{MoveDirection, PieceKind, RotateDirection};

fn bench_gravity(c: &mut Criterion) {
    let mut board = Board::with_factory(22, 10, PieceFactory::seeded(12345));

    c.bench_function("advance_gravity", |b| {
        b.iter(|| black_box(board.advance_gravity()))
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut grid = Grid::new(22, 10);
            for y in 18..22 {
                for x in 0..10 {
                    grid.set(x, y, PieceKind::I.cell());
                }
            }
            black_box(grid.clear_full_rows())
        })
    });
}

fn bench_spawn_next(c: &mut Criterion) {
    let mut board = Board::with_factory(22, 10, PieceFactory::seeded(12345));

    c.bench_function("spawn_next", |b| b.iter(|| board.spawn_next()));
}

fn bench_try_move(c: &mut Criterion) {
    let mut board = Board::with_factory(22, 10, PieceFactory::sequence([PieceKind::T]));

    c.bench_function("try_move", |b| {
        b.iter(|| {
            // Bounces between the walls.
            if !board.try_move(black_box(MoveDirection::Right)) {
                while board.try_move(MoveDirection::Left) {}
            }
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let mut board = Board::with_factory(22, 10, PieceFactory::sequence([PieceKind::L]));

    c.bench_function("try_rotate", |b| {
        b.iter(|| board.try_rotate(black_box(RotateDirection::Clockwise)))
    });
}

criterion_group!(
    benches,
    bench_gravity,
    bench_line_clear,
    bench_spawn_next,
    bench_try_move,
    bench_try_rotate
);
criterion_main!(benches);
