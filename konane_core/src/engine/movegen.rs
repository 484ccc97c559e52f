use core::ops::RangeInclusive;

use crate::engine::board::{Board, home_squares};
use crate::engine::types::{Cell, Move, Player, Square};

/// 上下左右の4方向（行差、列差）。
const DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// 着手が不正である理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum InvalidMove {
    /// 移動元に手番側の駒がない。
    #[error("origin {0} does not hold a piece of the mover")]
    OriginNotOwned(Square),
    /// 移動先が空いていない。
    #[error("destination {0} is not empty")]
    DestinationOccupied(Square),
    /// 移動元と移動先が同じ行・列にない。
    #[error("{0} is not a straight line")]
    NotStraightLine(Move),
    /// 移動距離が奇数。
    #[error("{0} does not move an even number of squares")]
    OddDistance(Move),
    /// 1つも駒を跳び越えていない。
    #[error("{0} does not jump over anything")]
    NothingCaptured(Move),
    /// 跳び越えるマスに相手の駒がない。
    #[error("jumped square {0} does not hold an opposing piece")]
    CaptureNotOpponent(Square),
    /// 途中の着地マスが空いていない。
    #[error("intermediate landing {0} is not empty")]
    LandingOccupied(Square),
}

/// 直線上の跳躍経路。
///
/// 両端のうち小さい方の座標から数えて、奇数番目が取られるマス、
/// 移動先を除く偶数番目が途中の着地マスになる。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct JumpPath {
    /// 行方向に沿う経路かどうか。
    horizontal: bool,
    /// 両端の距離（偶数、2以上）。
    len: u8,
    /// 両端のうち小さい方。
    low: Square,
}

impl JumpPath {
    /// `mv` の移動元と移動先の間の経路を求める。
    ///
    /// # Errors
    ///
    /// 直線でない場合、距離が0または奇数の場合にエラーを返す。
    #[inline]
    pub const fn of(mv: Move) -> Result<Self, InvalidMove> {
        let (from, to) = (mv.from(), mv.to());
        let (low, high) = if from.index() <= to.index() {
            (from, to)
        } else {
            (to, from)
        };

        let (horizontal, len) = if low.row() == high.row() {
            (true, high.col().wrapping_sub(low.col()))
        } else if low.col() == high.col() {
            (false, high.row().wrapping_sub(low.row()))
        } else {
            return Err(InvalidMove::NotStraightLine(mv));
        };

        if len == u8::MIN {
            return Err(InvalidMove::NothingCaptured(mv));
        }
        if len % 2 != 0 {
            return Err(InvalidMove::OddDistance(mv));
        }

        Ok(Self {
            horizontal,
            len,
            low,
        })
    }

    /// 跳び越える（取られる）マスを小さい座標から順に返す。
    #[inline]
    pub fn captured(self) -> impl Iterator<Item = Square> {
        (1..self.len)
            .step_by(2)
            .filter_map(move |step| self.square_at(step))
    }

    /// 途中の着地マス（両端を除く）を小さい座標から順に返す。
    #[inline]
    pub fn landings(self) -> impl Iterator<Item = Square> {
        (2..self.len)
            .step_by(2)
            .filter_map(move |step| self.square_at(step))
    }

    /// 経路が通る行の範囲。
    #[inline]
    #[must_use]
    pub const fn rows(self) -> RangeInclusive<u8> {
        let first = self.low.row();
        if self.horizontal {
            first..=first
        } else {
            first..=first.wrapping_add(self.len)
        }
    }

    /// 小さい方の端から `step` 進んだマス。
    const fn square_at(self, step: u8) -> Option<Square> {
        if self.horizontal {
            Square::from_rc(self.low.row(), self.low.col().wrapping_add(step))
        } else {
            Square::from_rc(self.low.row().wrapping_add(step), self.low.col())
        }
    }
}

/// 探索木の1ノード（盤面、その盤面を作った手番、その手）。
///
/// 親子へのリンクは持たない。探索の呼び出しが所有し、戻るときに捨てる。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SearchNode {
    /// 着手後の盤面。
    board: Board,
    /// この盤面を作った手番。
    mover: Player,
    /// この盤面を作った手。
    mv: Move,
}

impl SearchNode {
    /// 着手後の盤面を返す。
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// この盤面を作った手番を返す。
    #[inline]
    #[must_use]
    pub const fn mover(&self) -> Player {
        self.mover
    }

    /// この盤面を作った手を返す。
    #[inline]
    #[must_use]
    pub const fn mv(&self) -> Move {
        self.mv
    }
}

/// 指定マスの駒が少なくとも1方向へ跳べそうかを返す。
///
/// 隣が相手の駒で、その先が空いている方向があれば `true`。
/// 合法手の存在を保証する簡易判定で、全合法手の列挙の前段に使う。
#[inline]
#[must_use]
pub fn is_moveable(board: &Board, square: Square) -> bool {
    let Cell::Occupied(owner) = board.cell_at(square) else {
        return false;
    };
    let opponent = owner.opponent();

    DIRECTIONS.iter().any(|&(d_row, d_col)| {
        let over = square.offset(d_row, d_col);
        let land = square.offset(d_row.wrapping_mul(2), d_col.wrapping_mul(2));
        match (over, land) {
            (Some(over_sq), Some(land_sq)) => {
                board.cell_at(over_sq).is_occupied_by(opponent) && board.cell_at(land_sq).is_empty()
            }
            _ => false,
        }
    })
}

/// 移動元から幾何的に到達しうる移動先（盤面の状態は見ない）。
///
/// 同じ行を列の昇順に、次に同じ列を行の昇順に並べる。
#[inline]
pub fn destinations_from(from: Square) -> impl Iterator<Item = Square> {
    let (row, col) = (from.row(), from.col());
    let along_row = (col % 2..Square::BOARD_LEN)
        .step_by(2)
        .filter(move |&c| c != col)
        .filter_map(move |c| Square::from_rc(row, c));
    let along_col = (row % 2..Square::BOARD_LEN)
        .step_by(2)
        .filter(move |&r| r != row)
        .filter_map(move |r| Square::from_rc(r, col));
    along_row.chain(along_col)
}

/// 盤面を複製せずに `mv` の合法性だけを検証し、経路を返す。
///
/// # Errors
///
/// 検証に失敗した最初の理由を `InvalidMove` で返す。
#[inline]
pub fn validate_move(board: &Board, player: Player, mv: Move) -> Result<JumpPath, InvalidMove> {
    if !board.cell_at(mv.from()).is_occupied_by(player) {
        return Err(InvalidMove::OriginNotOwned(mv.from()));
    }
    if !board.cell_at(mv.to()).is_empty() {
        return Err(InvalidMove::DestinationOccupied(mv.to()));
    }

    let path = JumpPath::of(mv)?;
    let opponent = player.opponent();
    if let Some(square) = path
        .captured()
        .find(|&square| !board.cell_at(square).is_occupied_by(opponent))
    {
        return Err(InvalidMove::CaptureNotOpponent(square));
    }
    if let Some(square) = path
        .landings()
        .find(|&square| !board.cell_at(square).is_empty())
    {
        return Err(InvalidMove::LandingOccupied(square));
    }

    Ok(path)
}

/// 検証済みの手を適用した新しい盤面を作る。経路が通る行だけを複製する。
fn successor(board: &Board, player: Player, mv: Move, path: JumpPath) -> Board {
    let mut next = board.copy_with_rows_replaced(path.rows());
    for square in path.captured() {
        next.set(square, Cell::Empty);
    }
    next.set(mv.to(), Cell::Occupied(player));
    next.set(mv.from(), Cell::Empty);
    next
}

/// 外部から与えられた手を検証し、適用後の盤面を返す。
///
/// 元の盤面は変化しない。
///
/// # Errors
///
/// 手が不正な場合、`InvalidMove` を返す（盤面は複製されない）。
#[inline]
pub fn apply_move(board: &Board, player: Player, mv: Move) -> Result<Board, InvalidMove> {
    let path = validate_move(board, player, mv)?;
    Ok(successor(board, player, mv, path))
}

/// 合法手とその経路を、定位置の順→移動先の走査順で列挙する。
fn candidates(board: &Board, player: Player) -> impl Iterator<Item = (Move, JumpPath)> + '_ {
    home_squares(player)
        .iter()
        .copied()
        .filter(move |&from| board.cell_at(from).is_occupied_by(player) && is_moveable(board, from))
        .flat_map(|from| destinations_from(from).map(move |to| Move::new(from, to)))
        .filter_map(move |mv| validate_move(board, player, mv).ok().map(|path| (mv, path)))
}

/// `player` の合法手を、着手後の盤面とともに1つずつ生成する。
///
/// 盤面は要求されたときに初めて複製される。枝刈りで打ち切れば残りは作られない。
#[inline]
pub fn successors(board: &Board, player: Player) -> impl Iterator<Item = SearchNode> + '_ {
    candidates(board, player).map(move |(mv, path)| SearchNode {
        board: successor(board, player, mv, path),
        mover: player,
        mv,
    })
}

/// `player` の全合法手を、着手後の盤面とともに返す。
///
/// 順序は決定的（定位置の行優先順、次に移動先の走査順）。
#[inline]
#[must_use]
pub fn legal_moves(board: &Board, player: Player) -> Vec<SearchNode> {
    successors(board, player).collect()
}

/// `player` の合法手の数（モビリティ）を返す。盤面は複製しない。
#[inline]
#[must_use]
pub fn count_moves(board: &Board, player: Player) -> usize {
    candidates(board, player).count()
}

/// `player` に合法手が1つもないかを返す。
#[inline]
#[must_use]
pub fn has_no_moves(board: &Board, player: Player) -> bool {
    !home_squares(player)
        .iter()
        .any(|&square| board.cell_at(square).is_occupied_by(player) && is_moveable(board, square))
}
