use crate::engine::board::Board;
use crate::engine::types::{Move, Player};

/// 合法手がない手番に手の選択を求めた。
///
/// 呼び出し側は事前に終局判定を行う必要がある。
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{0} has no legal moves")]
pub struct NoLegalMoves(pub Player);

/// 手を選択するAI。
pub trait Ai {
    /// `player` の手番で次の手を選択する。
    ///
    /// # Errors
    ///
    /// `player` に合法手がない場合、`NoLegalMoves` を返す。
    fn select_move(&mut self, board: &Board, player: Player) -> Result<Move, NoLegalMoves>;
}
