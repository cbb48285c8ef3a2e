use criterion::{black_box, criterion_group, criterion_main, Criterion};
use merge2048::core::{reduce, transform, valid_moves, GameState, Grid};
use merge2048::types::Direction;

fn busy_grid() -> Grid {
    Grid::from_rows(&[
        [2, 2, 4, 8],
        [16, 16, 0, 2],
        [4, 0, 4, 4],
        [128, 64, 64, 2],
    ])
    .unwrap()
}

fn bench_reduce(c: &mut Criterion) {
    let line = [2, 2, 4, 4];
    c.bench_function("reduce_line", |b| {
        b.iter(|| reduce(black_box(&line)))
    });
}

fn bench_transform(c: &mut Criterion) {
    let grid = busy_grid();
    c.bench_function("transform_left", |b| {
        b.iter(|| transform(black_box(&grid), Direction::Left))
    });
    c.bench_function("transform_down", |b| {
        b.iter(|| transform(black_box(&grid), Direction::Down))
    });
}

fn bench_valid_moves(c: &mut Criterion) {
    let grid = busy_grid();
    c.bench_function("valid_moves", |b| {
        b.iter(|| valid_moves(black_box(&grid)))
    });
}

fn bench_apply_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("apply_move", |b| {
        b.iter(|| {
            match state.valid_moves().first() {
                Some(&dir) => {
                    state.apply_move(dir);
                }
                None => state.new_game(),
            }
        })
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("full_game", |b| {
        b.iter(|| {
            let mut state = GameState::new(black_box(7));
            while let Some(&dir) = state.valid_moves().first() {
                state.apply_move(dir);
            }
            state.score()
        })
    });
}

criterion_group!(
    benches,
    bench_reduce,
    bench_transform,
    bench_valid_moves,
    bench_apply_move,
    bench_full_game
);
criterion_main!(benches);
