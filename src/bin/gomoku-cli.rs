//! Console Gomoku
//!
//! Plays on stdin/stdout. Moves are typed as `row col` or `row,col`.

use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use gomoku::cli::ConsoleGame;
use gomoku::logger::init_logger;
use gomoku::{Board, GameArgs, GomokuError, Stone};

#[derive(Parser, Debug)]
#[command(name = "gomoku-cli", version, about = "Play Gomoku in the terminal")]
struct Cli {
    #[command(flatten)]
    game: GameArgs,

    /// Start from a position file: one line per row using X, O and '.'
    #[arg(long)]
    position: Option<PathBuf>,

    /// Side to move in the position file
    #[arg(long, default_value = "x")]
    to_move: String,

    /// Write the resolved configuration to this YAML file and exit
    #[arg(long)]
    save_config: Option<PathBuf>,
}

fn load_position(path: &Path, to_move: &str) -> gomoku::Result<Board> {
    let text = std::fs::read_to_string(path).map_err(|source| GomokuError::Io {
        operation: format!("read position file {}", path.display()),
        source,
    })?;
    let turn = match to_move.trim().to_ascii_lowercase().as_str() {
        "x" => Stone::X,
        "o" => Stone::O,
        other => {
            return Err(GomokuError::MalformedInput {
                input: other.to_string(),
                reason: "side to move must be x or o".to_string(),
            })
        }
    };
    let rows: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    Board::from_rows(&rows, turn)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logger(Some("cli".to_string()), cli.game.log_level);

    let config = cli.game.resolve()?;
    if let Some(path) = &cli.save_config {
        config.save(path)?;
        println!("Saved configuration to {}", path.display());
        return Ok(());
    }

    let board = match &cli.position {
        Some(path) => load_position(path, &cli.to_move)?,
        None => Board::new(config.board_size)?,
    };
    log::info!(
        "starting {}x{} game: X {} / O {}",
        board.size(),
        board.size(),
        config.x,
        config.o
    );

    let stdin = io::stdin();
    let mut game = ConsoleGame::new(board, &config, stdin.lock(), io::stdout());
    game.play()?;
    Ok(())
}
