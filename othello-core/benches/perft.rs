use criterion::*;

#[cfg(unix)]
use pprof::criterion::{Output, PProfProfiler};

use othello_core::test_utils::run_perft;
use othello_core::{Board, Game, Player};

fn criterion_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.sample_size(20);

    for depth in 1..6 {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| run_perft(black_box(depth)))
        });
    }

    group.finish();
}

fn criterion_turn(c: &mut Criterion) {
    c.bench_function("legal_moves/start", |b| {
        let board = Board::new();
        b.iter(|| black_box(board).legal_moves(black_box(Player::Black)))
    });

    c.bench_function("attempt_move/opening", |b| {
        b.iter_batched(
            Game::new,
            |mut game| game.attempt_move(black_box(2), black_box(3)),
            BatchSize::SmallInput,
        )
    });
}

#[cfg(unix)]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_perft, criterion_turn
}

#[cfg(not(unix))]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_perft, criterion_turn
}

criterion_main!(benches);
