use core::fmt;
use core::ops::RangeInclusive;
use core::str::FromStr;
use std::sync::{Arc, LazyLock};

use crate::engine::types::{Cell, Player, Square};

/// 1行分のマス。
type Row = [Cell; Square::BOARD_LEN as usize];

/// 初期配置で空けておく中央の2マス（3d, 3e）。
const CENTER_GAP: [(u8, u8); 2] = [(3, 3), (3, 4)];

/// 各プレイヤーの定位置（市松模様の32マス）。行優先の固定順。
static HOME_SQUARES: LazyLock<[Vec<Square>; 2]> = LazyLock::new(|| {
    let mut first = Vec::with_capacity(32);
    let mut second = Vec::with_capacity(32);
    for row in u8::MIN..Square::BOARD_LEN {
        for col in u8::MIN..Square::BOARD_LEN {
            let Some(square) = Square::from_rc(row, col) else {
                continue;
            };
            match home_owner(square) {
                Player::First => first.push(square),
                Player::Second => second.push(square),
            }
        }
    }
    [first, second]
});

/// マスの市松パリティから、初期配置でそのマスを持つプレイヤーを返す。
#[inline]
const fn home_owner(square: Square) -> Player {
    if square.row().wrapping_add(square.col()) % 2 == 0 {
        Player::First
    } else {
        Player::Second
    }
}

/// `player` の定位置32マスを返す。
///
/// 盤面の現在の状態ではなく、盤の幾何だけから決まる。
#[inline]
#[must_use]
pub fn home_squares(player: Player) -> &'static [Square] {
    HOME_SQUARES
        .get(player.table_index())
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// 盤面の文字列表現の解析に失敗した理由。
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ParseBoardError {
    /// 行数が8ではない。
    #[error("expected 8 rows, found {found}")]
    RowCount {
        /// 実際の行数。
        found: usize,
    },
    /// 行内のマス数が8ではない。
    #[error("row {row}: expected 8 cells, found {found}")]
    RowLength {
        /// 行番号。
        row: usize,
        /// 実際のマス数。
        found: usize,
    },
    /// 解釈できない記号。
    #[error("row {row}: unknown cell symbol {symbol:?}")]
    UnknownSymbol {
        /// 行番号。
        row: usize,
        /// 記号。
        symbol: char,
    },
}

/// 8×8 の盤面。
///
/// 一度生成した盤面は外部から書き換えられない。行単位で `Arc` を共有し、
/// 着手時は変化する行だけを複製する。
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    /// 行ごとのマス。
    rows: [Arc<Row>; Square::BOARD_LEN as usize],
}

impl Board {
    /// 指定マスの状態を返す。
    #[inline]
    #[must_use]
    pub fn cell_at(&self, square: Square) -> Cell {
        self.rows
            .get(usize::from(square.row()))
            .and_then(|row| row.get(usize::from(square.col())))
            .copied()
            .unwrap_or(Cell::Empty)
    }

    /// `rows` の行だけを新たに複製し、それ以外の行を共有した盤面を返す。
    ///
    /// 元の盤面は変化しない。
    #[inline]
    #[must_use]
    pub fn copy_with_rows_replaced(&self, rows: RangeInclusive<u8>) -> Self {
        let mut next = self.clone();
        for row in rows {
            if let Some(slot) = next.rows.get_mut(usize::from(row)) {
                *slot = Arc::new(**slot);
            }
        }
        next
    }

    /// 駒が1つもない盤面を返す。
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::from_rows([[Cell::Empty; Square::BOARD_LEN as usize]; Square::BOARD_LEN as usize])
    }

    /// 行の配列から盤面を生成する。
    #[inline]
    #[must_use]
    pub fn from_rows(rows: [Row; Square::BOARD_LEN as usize]) -> Self {
        Self {
            rows: rows.map(Arc::new),
        }
    }

    /// 初期局面を返す。
    ///
    /// 各マスには市松模様に従って駒を置き、中央の2マスだけ空ける。
    #[inline]
    #[must_use]
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for player in [Player::First, Player::Second] {
            for &square in home_squares(player) {
                board.set(square, Cell::Occupied(player));
            }
        }
        for (row, col) in CENTER_GAP {
            if let Some(square) = Square::from_rc(row, col) {
                board.set(square, Cell::Empty);
            }
        }
        board
    }

    /// 駒数（先手、後手）を返す。
    #[inline]
    #[must_use]
    pub fn piece_counts(&self) -> (u32, u32) {
        let mut first = u32::MIN;
        let mut second = u32::MIN;
        for cell in self.rows.iter().flat_map(|row| row.iter()) {
            match *cell {
                Cell::Occupied(Player::First) => first = first.wrapping_add(1),
                Cell::Occupied(Player::Second) => second = second.wrapping_add(1),
                Cell::Empty => {}
            }
        }
        (first, second)
    }

    /// 指定行のデータを `other` と共有しているかどうか。
    #[inline]
    #[must_use]
    pub fn shares_row(&self, other: &Self, row: u8) -> bool {
        let idx = usize::from(row);
        match (self.rows.get(idx), other.rows.get(idx)) {
            (Some(lhs), Some(rhs)) => Arc::ptr_eq(lhs, rhs),
            _ => false,
        }
    }

    /// マスの状態を書き換える（crate 内部向け）。
    ///
    /// 共有中の行であれば先に複製されるため、他の盤面からは観測されない。
    #[inline]
    pub(crate) fn set(&mut self, square: Square, cell: Cell) {
        if let Some(row) = self.rows.get_mut(usize::from(square.row())) {
            if let Some(slot) = Arc::make_mut(row).get_mut(usize::from(square.col())) {
                *slot = cell;
            }
        }
    }
}

impl fmt::Display for Board {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for (index, row) in self.rows.iter().enumerate() {
            write!(f, "{index}")?;
            for cell in row.iter() {
                let symbol = match *cell {
                    Cell::Occupied(player) => player.symbol(),
                    Cell::Empty => '.',
                };
                write!(f, " {symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// `x`（先手）、`o`（後手）、`.`（空き）の8行から盤面を読む。
///
/// 空行は無視し、マスの間の空白は区切りとして扱う。
impl FromStr for Board {
    type Err = ParseBoardError;

    #[inline]
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.len() != usize::from(Square::BOARD_LEN) {
            return Err(ParseBoardError::RowCount { found: lines.len() });
        }

        let mut rows = [[Cell::Empty; Square::BOARD_LEN as usize]; Square::BOARD_LEN as usize];
        for (row_index, (line, row)) in lines.iter().zip(rows.iter_mut()).enumerate() {
            let cells = line
                .chars()
                .filter(|symbol| !symbol.is_whitespace())
                .map(|symbol| match symbol {
                    'x' | 'X' => Ok(Cell::Occupied(Player::First)),
                    'o' | 'O' => Ok(Cell::Occupied(Player::Second)),
                    '.' | '_' | '-' => Ok(Cell::Empty),
                    _ => Err(ParseBoardError::UnknownSymbol {
                        row: row_index,
                        symbol,
                    }),
                })
                .collect::<Result<Vec<Cell>, ParseBoardError>>()?;

            if cells.len() != row.len() {
                return Err(ParseBoardError::RowLength {
                    row: row_index,
                    found: cells.len(),
                });
            }
            row.copy_from_slice(&cells);
        }

        Ok(Self::from_rows(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::{Board, ParseBoardError, home_squares};
    use crate::engine::types::{Cell, Player, Square};

    fn sq(row: u8, col: u8) -> Square {
        Square::from_rc(row, col).unwrap_or_else(|| unreachable!())
    }

    #[test]
    fn home_squares_split_board_by_parity() {
        let first = home_squares(Player::First);
        let second = home_squares(Player::Second);
        assert_eq!(first.len(), 32);
        assert_eq!(second.len(), 32);
        assert_eq!(first.first(), Some(&sq(0, 0)));
        assert_eq!(second.first(), Some(&sq(0, 1)));
        assert!(first.iter().all(|s| (s.row() + s.col()) % 2 == 0));
        assert!(second.iter().all(|s| (s.row() + s.col()) % 2 == 1));
        assert!(first.windows(2).all(|w| matches!(w, [a, b] if a < b)));
    }

    #[test]
    fn initial_board_has_two_center_gaps() {
        let board = Board::initial();
        assert_eq!(board.piece_counts(), (31, 31));
        assert_eq!(board.cell_at(sq(3, 3)), Cell::Empty);
        assert_eq!(board.cell_at(sq(3, 4)), Cell::Empty);
        assert_eq!(board.cell_at(sq(0, 0)), Cell::Occupied(Player::First));
        assert_eq!(board.cell_at(sq(1, 0)), Cell::Occupied(Player::Second));
    }

    #[test]
    fn copy_with_rows_replaced_shares_untouched_rows() {
        let board = Board::initial();
        let mut next = board.copy_with_rows_replaced(2..=4);
        next.set(sq(3, 6), Cell::Empty);

        assert_eq!(board.cell_at(sq(3, 6)), Cell::Occupied(Player::Second));
        assert_eq!(next.cell_at(sq(3, 6)), Cell::Empty);
        for row in 0_u8..8 {
            assert_eq!(next.shares_row(&board, row), !(2..=4).contains(&row));
        }
    }

    #[test]
    fn set_on_shared_row_does_not_leak_into_parent() {
        let board = Board::initial();
        let mut next = board.clone();
        next.set(sq(0, 0), Cell::Empty);
        assert_eq!(board.cell_at(sq(0, 0)), Cell::Occupied(Player::First));
        assert!(!next.shares_row(&board, 0));
        assert!(next.shares_row(&board, 1));
    }

    #[test]
    fn parse_matches_display_cells() {
        let board = Board::initial();
        let rendered = board.to_string();
        let body: String = rendered
            .lines()
            .skip(1)
            .map(|line| line.get(1..).unwrap_or_default())
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(body.parse::<Board>(), Ok(board));
    }

    #[test]
    fn parse_rejects_malformed_text() {
        assert_eq!(
            "x o".parse::<Board>(),
            Err(ParseBoardError::RowCount { found: 1 })
        );
        let short_row = "xoxoxoxo\n".repeat(7) + "xox";
        assert_eq!(
            short_row.parse::<Board>(),
            Err(ParseBoardError::RowLength { row: 7, found: 3 })
        );
        let bad_symbol = "xoxoxoxo\n".repeat(7) + "xoxoxoxz";
        assert_eq!(
            bad_symbol.parse::<Board>(),
            Err(ParseBoardError::UnknownSymbol { row: 7, symbol: 'z' })
        );
    }
}
