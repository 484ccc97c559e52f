//! 固定深さのミニマックス（αβ枝刈り付き）で手を選ぶAI。
//!
//! 評価は常にルート手番の視点で行い、ノードごとに最大化/最小化の役割だけが入れ替わる。

use crate::ai::types::{Ai, NoLegalMoves};
use crate::engine::board::Board;
use crate::engine::types::{Move, Player};

/// 探索設定と統計。
mod config;
/// 評価関数。
mod eval;
/// 探索本体。
mod search;

pub use config::{EvalPolicy, SearchConfig, SearchStats};
pub use eval::{SCORE_WIN, evaluate};
pub use search::{SearchResult, choose_move};

/// 探索窓の初期値（±）。終局時の評価値と同じ大きさにする。
pub const INF: i32 = SCORE_WIN;

/// アルファベータ探索を行うAI。
#[derive(Debug)]
#[non_exhaustive]
pub struct Agent {
    /// 探索設定。
    config: SearchConfig,
}

impl Agent {
    /// 探索設定を返す。
    #[inline]
    #[must_use]
    pub const fn config(&self) -> SearchConfig {
        self.config
    }

    /// 探索深さ `depth`、既定の評価方針で初期化する。
    #[inline]
    #[must_use]
    pub const fn new(depth: u8) -> Self {
        Self::with_config(SearchConfig::new().with_depth(depth))
    }

    /// 探索設定を指定して初期化する。
    #[inline]
    #[must_use]
    pub const fn with_config(config: SearchConfig) -> Self {
        Self { config }
    }
}

impl Ai for Agent {
    #[inline]
    fn select_move(&mut self, board: &Board, player: Player) -> Result<Move, NoLegalMoves> {
        choose_move(board, player, self.config).map(|result| result.best_move())
    }
}
