//! 端末で人間と αβ 探索 AI が対戦する Konane。

use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use konane_core::ai::alphabeta::{self, EvalPolicy, SearchConfig};
use konane_core::ai::types::Ai;
use konane_core::engine;

/// 列を表す文字。
const COL_LETTERS: &str = "abcdefgh";

/// Play Konane (Hawaiian checkers) against a minimax engine.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Search depth in plies.
    #[arg(long, default_value_t = SearchConfig::DEFAULT_DEPTH)]
    depth: u8,

    /// Evaluation function used at the search leaves.
    #[arg(long, value_enum, default_value_t = EvalArg::Saturating)]
    eval: EvalArg,

    /// Side played by the engine (`first` is x and moves first).
    #[arg(long, value_enum, default_value_t = SideArg::Second)]
    engine_plays: SideArg,

    /// Minimum level of log records written to stderr.
    #[arg(long, default_value_t = tracing::Level::WARN)]
    log_level: tracing::Level,

    /// Write log records as JSON lines.
    #[arg(long, default_value_t = false)]
    log_json: bool,
}

/// `--eval` の選択肢。
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum EvalArg {
    /// Plain mobility difference.
    Mobility,
    /// Mobility difference with win/loss sentinels.
    Saturating,
}

impl From<EvalArg> for EvalPolicy {
    fn from(value: EvalArg) -> Self {
        match value {
            EvalArg::Mobility => Self::Mobility,
            EvalArg::Saturating => Self::SaturatingMobility,
        }
    }
}

/// `--engine-plays` の選択肢。
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum SideArg {
    /// The x pieces.
    First,
    /// The o pieces.
    Second,
}

impl From<SideArg> for engine::Player {
    fn from(value: SideArg) -> Self {
        match value {
            SideArg::First => Self::First,
            SideArg::Second => Self::Second,
        }
    }
}

#[derive(Debug)]
enum Controller {
    Alphabeta(alphabeta::Agent),
    Human,
}

/// 対局の進行と入出力。
#[derive(Debug)]
struct App {
    first: Controller,
    game: engine::Game,
    second: Controller,
}

/// 入力待ちの結果。
enum Input {
    Quit,
    Square(engine::Square),
}

impl App {
    fn new(config: SearchConfig, engine_side: engine::Player) -> Self {
        let engine_controller = || Controller::Alphabeta(alphabeta::Agent::with_config(config));
        let (first, second) = match engine_side {
            engine::Player::First => (engine_controller(), Controller::Human),
            _ => (Controller::Human, engine_controller()),
        };
        Self {
            first,
            game: engine::Game::initial(),
            second,
        }
    }

    fn controller_for_mut(&mut self, player: engine::Player) -> &mut Controller {
        match player {
            engine::Player::First => &mut self.first,
            _ => &mut self.second,
        }
    }

    /// 終局まで対局する。途中で `quit` されたら `None`。
    fn run<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<Option<engine::Player>> {
        loop {
            write!(output, "{}", self.game.board())?;

            if let engine::GameStatus::GameOver { winner } = self.game.status() {
                writeln!(output, "Winner is: {winner}")?;
                return Ok(Some(winner));
            }

            let side = self.game.side_to_move();
            let board = self.game.board().clone();
            let mv = match self.controller_for_mut(side) {
                Controller::Alphabeta(agent) => match agent.select_move(&board, side) {
                    Ok(mv) => {
                        writeln!(output, "Computer moves {mv}")?;
                        mv
                    }
                    Err(err) => {
                        tracing::error!(%err, "engine asked to move without legal moves");
                        return Ok(Some(side.opponent()));
                    }
                },
                Controller::Human => {
                    let from_cell = engine::Cell::Occupied(side);
                    let Input::Square(from) = prompt_square(input, output, "Move From: ", from_cell, &board)?
                    else {
                        return Ok(None);
                    };
                    let Input::Square(to) =
                        prompt_square(input, output, "Move To: ", engine::Cell::Empty, &board)?
                    else {
                        return Ok(None);
                    };
                    engine::Move::new(from, to)
                }
            };

            if let Err(err) = self.game.play(mv) {
                writeln!(output, "Illegal move: {err}")?;
            }
        }
    }
}

/// `3d` または `d3` 形式のマスを読む。
fn parse_square(text: &str) -> Option<engine::Square> {
    let mut chars = text.chars();
    let (first, second) = (chars.next()?, chars.next()?);
    if chars.next().is_some() {
        return None;
    }

    let (digit, letter) = if first.is_ascii_digit() {
        (first, second)
    } else {
        (second, first)
    };
    let row = u8::try_from(digit.to_digit(10)?).ok()?;
    let col = u8::try_from(COL_LETTERS.find(letter)?).ok()?;
    engine::Square::from_rc(row, col)
}

/// 指定の状態のマスが入力されるまで繰り返し尋ねる。
fn prompt_square<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    expected: engine::Cell,
    board: &engine::Board,
) -> io::Result<Input> {
    let mut line = String::new();
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(Input::Quit);
        }
        let text = line.trim().to_lowercase();
        if text == "quit" || text == "exit" {
            return Ok(Input::Quit);
        }

        let Some(square) = parse_square(&text) else {
            continue;
        };
        if board.cell_at(square) != expected {
            let contents = match expected {
                engine::Cell::Occupied(player) => player.to_string(),
                _ => String::from("blank"),
            };
            writeln!(output, "Square should contain {contents}")?;
            continue;
        }
        return Ok(Input::Square(square));
    }
}

/// ログ出力を初期化する（stderr、既定は人間向け、`--log-json` で JSON）。
fn init_tracing(cli: &Cli) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(io::stderr);
    if cli.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let config = SearchConfig::new()
        .with_depth(cli.depth)
        .with_policy(cli.eval.into());
    tracing::info!(?config, engine = %engine::Player::from(cli.engine_plays), "starting game");

    let mut app = App::new(config, cli.engine_plays.into());
    let stdin = io::stdin();
    let stdout = io::stdout();
    app.run(&mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{App, SearchConfig, parse_square};
    use konane_core::engine;

    #[test]
    fn parse_square_accepts_both_orders() {
        let expected = engine::Square::from_rc(3, 3);
        assert_eq!(parse_square("3d"), expected);
        assert_eq!(parse_square("d3"), expected);
        assert_eq!(parse_square("8a"), None);
        assert_eq!(parse_square("3i"), None);
        assert_eq!(parse_square("3dd"), None);
        assert_eq!(parse_square(""), None);
    }

    #[test]
    fn human_move_then_engine_reply() {
        let mut app = App::new(SearchConfig::new().with_depth(2), engine::Player::Second);
        let mut input = "7a\n5d\nzz\n3d\nquit\n".as_bytes();
        let mut output = Vec::new();

        let result = app.run(&mut input, &mut output);
        assert!(matches!(result, Ok(None)));

        let text = String::from_utf8_lossy(&output);
        assert!(text.contains("Square should contain x"), "{text}");
        assert!(text.contains("Computer moves"), "{text}");
        assert_eq!(app.game.side_to_move(), engine::Player::First);
    }

    #[test]
    fn engine_can_open_the_game() {
        let mut app = App::new(SearchConfig::new().with_depth(1), engine::Player::First);
        let mut input = "exit\n".as_bytes();
        let mut output = Vec::new();

        let result = app.run(&mut input, &mut output);
        assert!(matches!(result, Ok(None)));
        assert!(String::from_utf8_lossy(&output).contains("Computer moves"));
    }
}
