//! Gomoku with fixed-depth minimax and alpha-beta agents
//!
//! Two players, X (first) and O, alternately place stones on an N x N board.
//! Five or more in a row in any direction wins; a full board without one is
//! a draw.
//!
//! # Architecture
//!
//! - [`board`]: board state with one bitboard per player, scoped moves
//! - [`rules`]: five-in-a-row detection and game status
//! - [`eval`]: the rule-based heuristic and its scan configuration
//! - [`search`]: minimax with optional alpha-beta pruning
//! - [`engine`]: agents that pick moves for a side
//! - [`config`], [`logger`], [`error`]: ambient plumbing for the drivers
//! - [`cli`], [`ui`]: console and egui front ends
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Board, GameStatus, Searcher, Stone};
//!
//! let mut board = Board::from_rows(
//!     &["O....", "O....", "O....", "O....", ".XXX."],
//!     Stone::O,
//! ).unwrap();
//!
//! let result = Searcher::alpha_beta(2).search(&board);
//! let pos = result.best_move.unwrap();
//! board.apply_move(pos).unwrap();
//! assert_eq!(board.status(), GameStatus::Win(Stone::O));
//! ```

pub mod board;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod logger;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, MoveGuard, Pos, Stone, MAX_BOARD_SIZE, WIN_LENGTH};
pub use config::{GameArgs, GameConfig, PlayerKind, Validate};
pub use engine::{build_agent, Agent, AgentKind, MoveResult, RandomAgent, SearchAgent, SearchType};
pub use error::{GomokuError, Result};
pub use eval::{evaluate, evaluate_for, EvalConfig, LineScan, PatternScore};
pub use rules::GameStatus;
pub use search::{Pruning, SearchResult, SearchStats, Searcher};
