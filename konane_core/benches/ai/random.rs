//! `konane_core::ai::random` の性能計測（1手選択）。

use core::hint::black_box;
use criterion::BatchSize;
use criterion::BenchmarkId;
use criterion::Criterion;
use konane_core::ai::types::Ai;
use konane_core::{ai, engine};

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// 指定手数だけ進めた局面を返す（途中で終局した場合はその時点で止める）。
fn position_after_plies(plies: u16) -> (engine::Board, engine::Player) {
    let mut first_agent = ai::random::Agent::new(u64::MIN);
    let mut game = engine::Game::initial();
    let mut second_agent = ai::random::Agent::new(u64::MIN.wrapping_add(1));

    for _turn in u16::MIN..plies {
        let side = game.side_to_move();
        let selected = match side {
            engine::Player::First => first_agent.select_move(game.board(), side),
            engine::Player::Second => second_agent.select_move(game.board(), side),
            _ => break,
        };
        let Ok(mv) = selected else {
            break;
        };

        match game.play(mv) {
            Ok(engine::GameStatus::InProgress) => {}
            Ok(_) | Err(_) => break,
        }
    }

    (game.board().clone(), game.side_to_move())
}

/// ベンチ用に代表局面をいくつか用意する。
fn position_samples() -> [(engine::Board, engine::Player); 3] {
    [
        (engine::Board::initial(), engine::Player::First),
        position_after_plies(6),
        position_after_plies(16),
    ]
}

/// `random::Agent::select_move` を計測する。
fn bench_select_move(criterion: &mut Criterion) {
    let samples = position_samples();
    let mut group = criterion.benchmark_group("ai/random/select_move");

    for (index, sample) in samples.iter().enumerate() {
        let bench_id = BenchmarkId::new("pos", index);
        group.bench_with_input(bench_id, sample, |bench, (board, side)| {
            bench.iter_batched(
                || ai::random::Agent::new(u64::MIN),
                |mut agent| black_box(agent.select_move(board, *side)),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();
    bench_select_move(&mut criterion);
    criterion.final_summary();
}
