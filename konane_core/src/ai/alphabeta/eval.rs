use crate::engine::board::Board;
use crate::engine::movegen::count_moves;
use crate::engine::types::Player;

use super::config::EvalPolicy;

/// 勝敗が決まった局面の評価値。合法手数の差（最大でも駒数の32）を必ず上回る。
pub const SCORE_WIN: i32 = 1_000;

/// `perspective` 視点で盤面を評価する。
///
/// `SaturatingMobility` では自分の合法手が0なら `-SCORE_WIN`、
/// そうでなく相手の合法手が0なら `SCORE_WIN` を返す。
#[inline]
#[must_use]
pub fn evaluate(board: &Board, perspective: Player, policy: EvalPolicy) -> i32 {
    let own = count_moves(board, perspective);
    let other = count_moves(board, perspective.opponent());

    match policy {
        EvalPolicy::Mobility => diff_i32(own, other),
        EvalPolicy::SaturatingMobility => {
            if own == usize::MIN {
                SCORE_WIN.wrapping_neg()
            } else if other == usize::MIN {
                SCORE_WIN
            } else {
                diff_i32(own, other)
            }
        }
    }
}

/// `usize` 同士の差を `i32` として返す。
fn diff_i32(lhs: usize, rhs: usize) -> i32 {
    let ai = i32::try_from(lhs).unwrap_or(i32::MAX);
    let bi = i32::try_from(rhs).unwrap_or(i32::MAX);
    ai.wrapping_sub(bi)
}
