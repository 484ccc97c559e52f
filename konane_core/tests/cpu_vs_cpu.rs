//! 結合テスト: CPU同士の対戦が終局まで進むことを確認する。

/// 統合テスト本体。
#[cfg(test)]
mod tests {
    use konane_core::ai::types::Ai;
    use konane_core::{ai, engine};

    /// 探索ログをテスト出力へ流す（複数回呼ばれても良い）。
    fn init_tracing() {
        let _ignored = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    }

    /// `alphabeta` が合法手のみ選ぶことを確認する。
    #[test]
    fn alphabeta_selects_legal_move() {
        init_tracing();
        let board = engine::Board::initial();
        let legal: Vec<engine::Move> = engine::legal_moves(&board, engine::Player::First)
            .iter()
            .map(engine::SearchNode::mv)
            .collect();
        assert!(!legal.is_empty(), "initial position must have legal moves");

        let mut agent = ai::alphabeta::Agent::new(3);
        let mv = agent.select_move(&board, engine::Player::First);
        assert!(
            mv.is_ok_and(|value| legal.contains(&value)),
            "alphabeta must select a legal move, got={mv:?}"
        );
    }

    /// 先手・後手のAIで1局打ち切り、勝者と手数を返す。
    fn play_game(first: &mut dyn Ai, second: &mut dyn Ai) -> (engine::Player, u16) {
        let mut game = engine::Game::initial();

        // 1手ごとに駒が1つ以上減るので、62手を超えることはない。
        for turn in u16::MIN..100 {
            let side = game.side_to_move();
            let agent: &mut dyn Ai = match side {
                engine::Player::First => &mut *first,
                engine::Player::Second => &mut *second,
                _ => return (side, turn),
            };

            let mv = agent.select_move(game.board(), side);
            assert!(mv.is_ok(), "side to move must have a move, got={mv:?}");
            let Ok(mv) = mv else {
                return (side, turn);
            };

            let play_result = game.play(mv);
            assert!(
                play_result.is_ok(),
                "play must succeed, got={play_result:?}"
            );

            if let Ok(engine::GameStatus::GameOver { winner }) = play_result {
                assert_eq!(winner, side, "the last mover wins");
                let (first_count, second_count) = game.board().piece_counts();
                assert!(
                    first_count + second_count <= 62,
                    "pieces must only be removed"
                );
                return (winner, turn + 1);
            }
        }

        panic!("game did not finish within turn limit");
    }

    /// `random vs alphabeta` が終局まで進む。
    #[test]
    fn random_vs_alphabeta_finishes() {
        init_tracing();
        for (seed, depth) in [(u64::MIN, 1_u8), (42, 3)] {
            let mut first = ai::random::Agent::new(seed);
            let mut second = ai::alphabeta::Agent::new(depth);
            let (_winner, turns) = play_game(&mut first, &mut second);
            assert!(turns >= 1);
        }
    }

    /// `random` 同士で終局することを確認する。
    #[test]
    fn random_vs_random_finishes() {
        for (seed_first, seed_second) in [(u64::MIN, 1_u64), (42, 4242)] {
            let mut first = ai::random::Agent::new(seed_first);
            let mut second = ai::random::Agent::new(seed_second);
            let (_winner, turns) = play_game(&mut first, &mut second);
            assert!(turns >= 1);
        }
    }

    /// 同じ設定のαβ同士は毎回同じ棋譜になる。
    #[test]
    fn alphabeta_self_play_is_deterministic() {
        let config = ai::alphabeta::SearchConfig::new().with_depth(2);
        let run = || {
            let mut first = ai::alphabeta::Agent::with_config(config);
            let mut second = ai::alphabeta::Agent::with_config(config);
            play_game(&mut first, &mut second)
        };
        assert_eq!(run(), run());
    }
}
