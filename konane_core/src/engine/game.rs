use crate::engine::board::Board;
use crate::engine::movegen::{InvalidMove, apply_move, has_no_moves};
use crate::engine::types::{Move, Player};

/// ゲームの状態。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Status {
    /// 終局（手番側に合法手がない）。
    GameOver {
        /// 勝者（最後に着手した側）。
        winner: Player,
    },
    /// 進行中。
    InProgress,
}

/// 手の適用に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum PlayError {
    /// すでに終局している。
    #[error("the game is already over")]
    GameOver,
    /// 不正な手。
    #[error("illegal move: {0}")]
    IllegalMove(#[from] InvalidMove),
}

/// 1ゲームの進行を管理する構造体。
///
/// 盤面は着手のたびに新しい値へ置き換わる。失敗した着手は状態を変えない。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Game {
    /// 現在の盤面。
    board: Board,
    /// 手番。
    side_to_move: Player,
}

impl Game {
    /// 現在の盤面を返す。
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// 指定した盤面と手番からゲームを始める。
    #[inline]
    #[must_use]
    pub const fn from_board(board: Board, side_to_move: Player) -> Self {
        Self {
            board,
            side_to_move,
        }
    }

    /// 初期局面（先手番）からゲームを開始する。
    #[inline]
    #[must_use]
    pub fn initial() -> Self {
        Self::from_board(Board::initial(), Player::First)
    }

    /// 終局しているかどうかを返す。
    #[inline]
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        has_no_moves(&self.board, self.side_to_move)
    }

    /// 手番側の手を1つ適用する。
    ///
    /// # Errors
    ///
    /// 次の場合にエラーを返す：
    /// - `PlayError::GameOver`: すでにゲームが終局している場合
    /// - `PlayError::IllegalMove`: 手の検証に失敗した場合
    ///
    #[inline]
    pub fn play(&mut self, mv: Move) -> Result<Status, PlayError> {
        if self.is_game_over() {
            return Err(PlayError::GameOver);
        }

        let next = apply_move(&self.board, self.side_to_move, mv).inspect_err(|err| {
            tracing::debug!(player = %self.side_to_move, %mv, %err, "rejected move");
        })?;
        tracing::debug!(player = %self.side_to_move, %mv, "applied move");

        self.board = next;
        self.side_to_move = self.side_to_move.opponent();
        Ok(self.status())
    }

    /// 現手番を返す。
    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Player {
        self.side_to_move
    }

    /// 現在のゲーム状態を返す。
    #[inline]
    #[must_use]
    pub fn status(&self) -> Status {
        if self.is_game_over() {
            return Status::GameOver {
                winner: self.side_to_move.opponent(),
            };
        }

        Status::InProgress
    }
}
