use core::fmt;

/// 手番（駒の持ち主）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum Player {
    /// 先手（盤面表示では `x`）。
    First,
    /// 後手（盤面表示では `o`）。
    Second,
}

impl Player {
    /// 相手側のプレイヤーを返す。
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    /// 盤面表示に使う記号を返す。
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::First => 'x',
            Self::Second => 'o',
        }
    }

    /// 静的テーブル参照用の添字。
    #[inline]
    pub(crate) const fn table_index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

impl fmt::Display for Player {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// マスの状態。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
#[non_exhaustive]
pub enum Cell {
    /// 空きマス。
    #[default]
    Empty,
    /// 駒がある。
    Occupied(Player),
}

impl Cell {
    /// 空きマスかどうか。
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// `player` の駒が置かれているかどうか。
    #[inline]
    #[must_use]
    pub fn is_occupied_by(self, player: Player) -> bool {
        self == Self::Occupied(player)
    }
}

/// 盤面上のマス（0..=63のインデックス）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Square(
    /// `row * 8 + col` に対応する0..=63の値。
    u8,
);

impl Square {
    /// 盤の一辺の長さ。
    pub const BOARD_LEN: u8 = 8;

    /// 列を表す文字。
    const COL_LETTERS: &'static [u8; 8] = b"abcdefgh";

    /// 盤面座標（row, col）から `Square` を生成する。
    #[inline]
    #[must_use]
    pub const fn from_rc(row: u8, col: u8) -> Option<Self> {
        if row >= Self::BOARD_LEN || col >= Self::BOARD_LEN {
            return None;
        }

        let idx = match row.checked_mul(Self::BOARD_LEN) {
            Some(value) => value,
            None => return None,
        };

        match idx.checked_add(col) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// 0..=63 のインデックスを返す。
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// 行（0..=7）を返す。
    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        match self.0.checked_div(Self::BOARD_LEN) {
            Some(value) => value,
            None => u8::MIN,
        }
    }

    /// 列（0..=7）を返す。
    #[inline]
    #[must_use]
    pub const fn col(self) -> u8 {
        match self.0.checked_rem(Self::BOARD_LEN) {
            Some(value) => value,
            None => u8::MIN,
        }
    }

    /// (`d_row`, `d_col`) だけずらしたマスを返す（盤外なら `None`）。
    #[inline]
    #[must_use]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = match self.row().checked_add_signed(d_row) {
            Some(value) => value,
            None => return None,
        };
        let col = match self.col().checked_add_signed(d_col) {
            Some(value) => value,
            None => return None,
        };
        Self::from_rc(row, col)
    }

    /// 列の記号（`a`..=`h`）を返す。
    #[inline]
    #[must_use]
    pub fn col_letter(self) -> char {
        Self::COL_LETTERS
            .get(usize::from(self.col()))
            .map_or('?', |&letter| char::from(letter))
    }
}

impl fmt::Display for Square {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row(), self.col_letter())
    }
}

/// 1手（移動元と移動先）。
///
/// 移動元から同じ行または列に沿って偶数マス先へ跳ぶ。途中の奇数番目のマスは
/// 相手の駒（取られる）、偶数番目のマスは空きでなければならない。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Move {
    /// 移動元。
    from: Square,
    /// 移動先。
    to: Square,
}

impl Move {
    /// 移動元と移動先から手を生成する。
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// 移動元を返す。
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// 移動先を返す。
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }
}

impl fmt::Display for Move {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.from, self.to)
    }
}
