/// 盤面（行単位のコピーオンライト）。
pub mod board;
/// ゲーム進行（手番、終局判定など）の実装。
pub mod game;
/// 合法手生成、着手の検証と適用、終局判定。
pub mod movegen;
pub mod types;

pub type Board = board::Board;
pub type Game = game::Game;
pub type Player = types::Player;
pub type Cell = types::Cell;
pub type Square = types::Square;
pub type Move = types::Move;
pub type GameStatus = game::Status;
pub type PlayError = game::PlayError;
pub type InvalidMove = movegen::InvalidMove;
pub type SearchNode = movegen::SearchNode;

pub use movegen::{apply_move, count_moves, has_no_moves, legal_moves, successors};
