use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rps_core::{BeliefState, Evaluator, PlayerAlgorithm, PlayerId, Searcher, SeededRandom};
use rps_engine::{AutoPlayer, HeuristicEval, OnePlySearcher, PlayerConfig};

fn opening_state() -> BeliefState {
    let mut first = AutoPlayer::new(PlayerConfig::seeded(11));
    let mut second = AutoPlayer::new(PlayerConfig::seeded(11));
    first.initial_positions(PlayerId::One).unwrap();
    second.initial_positions(PlayerId::Two).unwrap();

    let mut owners = vec![None; rps_core::BOARD_CELLS];
    for &pos in &second.state().me().pieces {
        owners[pos] = Some(PlayerId::Two);
    }
    for &pos in &first.state().me().pieces {
        owners[pos] = Some(PlayerId::One);
    }
    first.notify_initial_board(&owners, &[]).unwrap();
    first.state().clone()
}

fn select_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("select");
    group.sample_size(50);

    let state = opening_state();
    let eval = HeuristicEval::default();
    let searcher = OnePlySearcher::default();

    group.bench_function("evaluate_opening", |b| {
        let mut rng = SeededRandom::new(1);
        b.iter(|| eval.evaluate(black_box(&state), &mut rng))
    });

    group.bench_function("best_move_opening", |b| {
        let mut rng = SeededRandom::new(2);
        b.iter(|| searcher.best_move(black_box(&state), &mut rng))
    });

    group.bench_function("best_reveal_opening", |b| {
        let mut rng = SeededRandom::new(3);
        b.iter(|| searcher.best_reveal(black_box(&state), &mut rng))
    });

    group.finish();
}

criterion_group!(benches, select_benchmarks);
criterion_main!(benches);
