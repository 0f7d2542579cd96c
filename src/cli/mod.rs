//! Console driver: text board, typed moves and the turn loop

pub mod input;
pub mod render;

use std::io::{self, BufRead, Write};

pub use input::parse_move;
pub use render::render_board;

use crate::board::{Board, Pos, Stone};
use crate::config::{GameConfig, PlayerKind};
use crate::engine::{build_agent, Agent};
use crate::error::{GomokuError, Result};
use crate::rules::GameStatus;

fn console_error(operation: &'static str) -> impl FnOnce(io::Error) -> GomokuError {
    move |source| GomokuError::Io {
        operation: operation.to_string(),
        source,
    }
}

/// Message shown to the player for a rejected move
fn rejection_message(err: &GomokuError) -> String {
    match err {
        GomokuError::OutOfBounds { .. } => {
            "Invalid move. Please choose a row and column within the boundaries of the board."
                .to_string()
        }
        GomokuError::CellOccupied { .. } => {
            "That space is already occupied. Please choose a different space.".to_string()
        }
        GomokuError::MalformedInput { .. } => {
            "Invalid input. Please enter a valid row and column.".to_string()
        }
        other => other.to_string(),
    }
}

/// Final announcement for a finished game
pub fn announcement(status: GameStatus) -> Option<String> {
    match status {
        GameStatus::Win(stone) => Some(format!("Player {} wins!", stone.symbol())),
        GameStatus::Draw => Some("The game is a draw.".to_string()),
        GameStatus::Ongoing => None,
    }
}

/// A console game between the players named in a [`GameConfig`]
pub struct ConsoleGame<R, W> {
    board: Board,
    agents: [Option<Box<dyn Agent + Send>>; 2],
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleGame<R, W> {
    pub fn new(board: Board, config: &GameConfig, input: R, output: W) -> Self {
        let agent_for = |kind: PlayerKind| {
            kind.agent()
                .map(|agent| build_agent(agent, config.search_depth, config.eval_config()))
        };
        Self {
            board,
            agents: [agent_for(config.x), agent_for(config.o)],
            input,
            output,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Play until the game is decided and return the final status
    pub fn play(&mut self) -> Result<GameStatus> {
        loop {
            let status = self.board.status();
            if let Some(message) = announcement(status) {
                self.show_board()?;
                writeln!(self.output, "{message}").map_err(console_error("write to console"))?;
                log::info!("game over: {message}");
                return Ok(status);
            }

            self.show_board()?;
            let pos = match self.agent_index(self.board.turn()) {
                Some(idx) => self.agent_move(idx)?,
                None => self.human_move()?,
            };
            log::debug!("{:?} played {}", self.board.turn(), pos);
            self.board.apply_move(pos)?;
        }
    }

    fn agent_index(&self, stone: Stone) -> Option<usize> {
        let idx = match stone {
            Stone::X => 0,
            Stone::O => 1,
            Stone::Empty => return None,
        };
        self.agents[idx].as_ref().map(|_| idx)
    }

    fn show_board(&mut self) -> Result<()> {
        write!(self.output, "{}", render_board(&self.board))
            .map_err(console_error("write to console"))
    }

    fn agent_move(&mut self, idx: usize) -> Result<Pos> {
        let turn = self.board.turn();
        let Some(agent) = self.agents[idx].as_mut() else {
            return Err(GomokuError::InvalidConfig {
                message: format!("no agent configured for {:?}", turn),
            });
        };

        let result = agent.select_move(&self.board);
        let Some(pos) = result.best_move else {
            return Err(GomokuError::InvalidConfig {
                message: format!("{} found no move on a board in play", agent.name()),
            });
        };
        log::info!(
            "{} ({}) plays {} score {} in {} ms ({} nodes)",
            turn.symbol(),
            agent.name(),
            pos,
            result.score,
            result.time_ms,
            result.nodes
        );
        writeln!(
            self.output,
            "Player {} ({}) plays {}",
            turn.symbol(),
            agent.name(),
            pos
        )
        .map_err(console_error("write to console"))?;
        Ok(pos)
    }

    fn human_move(&mut self) -> Result<Pos> {
        let turn = self.board.turn();
        loop {
            write!(self.output, "Player {}, enter row and column: ", turn.symbol())
                .and_then(|()| self.output.flush())
                .map_err(console_error("write to console"))?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .map_err(console_error("read move"))?;
            if read == 0 {
                return Err(GomokuError::Io {
                    operation: "read move".to_string(),
                    source: io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"),
                });
            }

            let checked = parse_move(&line).and_then(|(row, col)| {
                let pos = self.board.checked_pos(row, col)?;
                if !self.board.is_empty(pos) {
                    return Err(GomokuError::CellOccupied {
                        row: pos.row,
                        col: pos.col,
                    });
                }
                Ok(pos)
            });

            match checked {
                Ok(pos) => return Ok(pos),
                Err(err) if err.is_recoverable() => {
                    log::warn!("rejected move: {err}");
                    writeln!(self.output, "{}", rejection_message(&err))
                        .map_err(console_error("write to console"))?;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
