//! `konane_core::ai::alphabeta` の性能計測（深さ別の探索）。

use core::hint::black_box;
use criterion::BenchmarkId;
use criterion::Criterion;
use konane_core::ai::alphabeta::{EvalPolicy, SearchConfig, choose_move};
use konane_core::engine;

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// 初期局面で深さと評価方針を変えて `choose_move` を計測する。
fn bench_choose_move(criterion: &mut Criterion) {
    let board = engine::Board::initial();
    let mut group = criterion.benchmark_group("ai/alphabeta/choose_move");

    for policy in [EvalPolicy::Mobility, EvalPolicy::SaturatingMobility] {
        for depth in [1_u8, 2, 3, 4] {
            let config = SearchConfig::new().with_depth(depth).with_policy(policy);
            let bench_id = BenchmarkId::new(format!("{policy:?}"), depth);
            group.bench_with_input(bench_id, &config, |bench, &input| {
                bench.iter(|| black_box(choose_move(&board, engine::Player::First, input)));
            });
        }
    }

    group.finish();
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();
    bench_choose_move(&mut criterion);
    criterion.final_summary();
}
