/// 評価関数の方針。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum EvalPolicy {
    /// 合法手数の差のみ。
    Mobility,
    /// 合法手数の差。ただし一方の合法手が0なら勝敗の極値を返す。
    #[default]
    SaturatingMobility,
}

/// 探索設定。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SearchConfig {
    /// 探索の最大深さ（ply）。
    depth: u8,
    /// 評価関数の方針。
    policy: EvalPolicy,
}

impl SearchConfig {
    /// 既定の探索深さ。
    pub const DEFAULT_DEPTH: u8 = 3;

    /// 探索の最大深さ（ply）を返す。
    #[inline]
    #[must_use]
    pub const fn depth(self) -> u8 {
        self.depth
    }

    /// 既定値（深さ3、飽和付きモビリティ評価）で生成する。
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            depth: Self::DEFAULT_DEPTH,
            policy: EvalPolicy::SaturatingMobility,
        }
    }

    /// 評価関数の方針を返す。
    #[inline]
    #[must_use]
    pub const fn policy(self) -> EvalPolicy {
        self.policy
    }

    /// 探索の最大深さを差し替える。
    ///
    /// 0 と 1 はどちらもルートの子を直接評価する。
    #[inline]
    #[must_use]
    pub const fn with_depth(self, depth: u8) -> Self {
        Self { depth, ..self }
    }

    /// 評価関数の方針を差し替える。
    #[inline]
    #[must_use]
    pub const fn with_policy(self, policy: EvalPolicy) -> Self {
        Self { policy, ..self }
    }
}

impl Default for SearchConfig {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// 探索統計。
#[derive(Default, Clone, Copy, Debug, Eq, PartialEq)]
pub struct SearchStats {
    /// αβカットで残りの子を打ち切った回数。
    cutoffs: u64,
    /// 評価関数を呼んだ葉の数。
    leaves: u64,
    /// 探索したノード数（ルートの子以下）。
    nodes: u64,
}

impl SearchStats {
    /// 枝刈りの回数を返す。
    #[inline]
    #[must_use]
    pub const fn cutoffs(&self) -> u64 {
        self.cutoffs
    }

    /// 枝刈りの回数を加算する。
    pub(super) const fn inc_cutoffs(&mut self) {
        self.cutoffs = self.cutoffs.wrapping_add(1);
    }

    /// 葉の数を加算する。
    pub(super) const fn inc_leaves(&mut self) {
        self.leaves = self.leaves.wrapping_add(1);
    }

    /// 探索ノード数を加算する。
    pub(super) const fn inc_nodes(&mut self) {
        self.nodes = self.nodes.wrapping_add(1);
    }

    /// 評価した葉の数を返す。
    #[inline]
    #[must_use]
    pub const fn leaves(&self) -> u64 {
        self.leaves
    }

    /// 探索ノード数を返す。
    #[inline]
    #[must_use]
    pub const fn nodes(&self) -> u64 {
        self.nodes
    }
}
