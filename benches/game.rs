use criterion::{black_box, criterion_group, criterion_main, Criterion};

use nutsort::constants::DEEP_PUZZLE;
use nutsort::game::State;
use nutsort::solver::pruning::lower_bound;
use nutsort::solver::solutions::replay;

fn state_operations(c: &mut Criterion) {
    let puzzle: State = DEEP_PUZZLE.parse().unwrap();

    c.bench_function("legal moves", |b| b.iter(|| black_box(&puzzle).legal_moves()));
    c.bench_function("state key", |b| b.iter(|| black_box(&puzzle).key()));
    c.bench_function("lower bound", |b| b.iter(|| lower_bound(black_box(&puzzle))));

    let moves = puzzle.legal_moves();
    c.bench_function("replay", |b| {
        b.iter(|| {
            for &mv in moves.iter() {
                assert!(replay(black_box(&puzzle), &[mv]).is_ok());
            }
        })
    });
}

criterion_group!(benches, state_operations);
criterion_main!(benches);
