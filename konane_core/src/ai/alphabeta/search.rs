use crate::ai::types::NoLegalMoves;
use crate::engine::board::Board;
use crate::engine::movegen::{has_no_moves, successors};
use crate::engine::types::{Move, Player};

use super::INF;
use super::config::{EvalPolicy, SearchConfig, SearchStats};
use super::eval::evaluate;

/// 探索結果。
#[derive(Clone, Debug)]
pub struct SearchResult {
    /// ルートで選択した最善手。
    best_move: Move,
    /// `best_move` の評価値。
    best_score: i32,
    /// ルートの各手の評価値（生成順）。
    root_scores: Vec<(Move, i32)>,
    /// 探索統計。
    stats: SearchStats,
}

impl SearchResult {
    /// ルートで選択した最善手を返す。
    #[inline]
    #[must_use]
    pub const fn best_move(&self) -> Move {
        self.best_move
    }

    /// `best_move` の評価値を返す。
    #[inline]
    #[must_use]
    pub const fn best_score(&self) -> i32 {
        self.best_score
    }

    /// ルートの各手とその評価値を、合法手の生成順で返す。
    #[inline]
    #[must_use]
    pub fn root_scores(&self) -> &[(Move, i32)] {
        &self.root_scores
    }

    /// 探索統計を返す。
    #[inline]
    #[must_use]
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// 1回の探索で共有する値。
struct SearchContext {
    /// 探索の最大深さ。
    depth: u8,
    /// 評価関数の方針。
    policy: EvalPolicy,
    /// 評価の視点（ルートの手番）。
    root: Player,
    /// 探索統計。
    stats: SearchStats,
}

/// `player` の手番で最善手を探索して返す。
///
/// ルートの各手は独立した窓 `[-INF, INF]` で評価する。最高評価の手のうち
/// 生成順で最初のものを選ぶ。
///
/// # Errors
///
/// `player` に合法手がない場合、`NoLegalMoves` を返す。
#[inline]
pub fn choose_move(
    board: &Board,
    player: Player,
    config: SearchConfig,
) -> Result<SearchResult, NoLegalMoves> {
    let mut ctx = SearchContext {
        depth: config.depth(),
        policy: config.policy(),
        root: player,
        stats: SearchStats::default(),
    };

    let mut best: Option<(Move, i32)> = None;
    let mut root_scores = Vec::new();
    for child in successors(board, player) {
        let mv = child.mv();
        let score = minimax(
            &mut ctx,
            child.board(),
            player.opponent(),
            1,
            INF.wrapping_neg(),
            INF,
        );
        tracing::debug!(%player, %mv, score, "scored root move");

        root_scores.push((mv, score));
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
    }

    let Some((best_move, best_score)) = best else {
        return Err(NoLegalMoves(player));
    };
    tracing::info!(
        %player,
        %best_move,
        best_score,
        nodes = ctx.stats.nodes(),
        cutoffs = ctx.stats.cutoffs(),
        "picked move"
    );

    Ok(SearchResult {
        best_move,
        best_score,
        root_scores,
        stats: ctx.stats,
    })
}

/// ミニマックス（αβ付き、fail-hard）。
///
/// `to_act` がルート手番なら最大化、そうでなければ最小化する。
/// 戻り値は常にルート視点の評価値で、`[alpha, beta]` に収まる。
fn minimax(
    ctx: &mut SearchContext,
    board: &Board,
    to_act: Player,
    ply: u8,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    ctx.stats.inc_nodes();

    // 手番側に合法手がない局面も深さ上限と同じくルート視点で評価する。
    if ply >= ctx.depth || has_no_moves(board, to_act) {
        ctx.stats.inc_leaves();
        return evaluate(board, ctx.root, ctx.policy);
    }

    let next_ply = ply.saturating_add(1);
    if to_act == ctx.root {
        let mut bound = alpha;
        for child in successors(board, to_act) {
            let value = minimax(ctx, child.board(), to_act.opponent(), next_ply, alpha, beta);
            bound = bound.max(value);
            alpha = bound;
            if alpha >= beta {
                ctx.stats.inc_cutoffs();
                break;
            }
        }
        bound
    } else {
        let mut bound = beta;
        for child in successors(board, to_act) {
            let value = minimax(ctx, child.board(), to_act.opponent(), next_ply, alpha, beta);
            bound = bound.min(value);
            beta = bound;
            if beta <= alpha {
                ctx.stats.inc_cutoffs();
                break;
            }
        }
        bound
    }
}
