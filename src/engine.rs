//! Move-selecting agents for the non-human side
//!
//! An [`Agent`] looks at a board and proposes a move for the side to move.
//! Drivers apply the move themselves with [`Board::apply_move`].
//!
//! # Example
//!
//! ```
//! use gomoku::{build_agent, AgentKind, Board, EvalConfig};
//!
//! let mut board = Board::new(5).unwrap();
//! board.apply_move(board.checked_pos(2, 2).unwrap()).unwrap();
//!
//! let mut agent = build_agent(AgentKind::AlphaBeta, 1, EvalConfig::default());
//! let result = agent.select_move(&board);
//! if let Some(pos) = result.best_move {
//!     board.apply_move(pos).unwrap();
//! }
//! ```

use std::time::Instant;

use clap::ValueEnum;
use rand::seq::SliceRandom;
use rand::thread_rng;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Pos};
use crate::eval::{evaluate_for, EvalConfig};
use crate::search::{Pruning, SearchResult, Searcher};

/// Which algorithm produced a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    Minimax,
    AlphaBeta,
    Random,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, `None` when the board has no empty cell
    pub best_move: Option<Pos>,
    /// Evaluation score from the mover's point of view
    pub score: i32,
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    fn from_search(result: SearchResult, search_type: SearchType, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type,
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// A player that picks moves without human input
pub trait Agent {
    /// Propose a move for the side to move on `board`
    fn select_move(&mut self, board: &Board) -> MoveResult;

    /// Display name
    fn name(&self) -> &str;
}

/// Agent choices exposed to configuration and the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    Minimax,
    AlphaBeta,
    Random,
}

/// Build a boxed agent of the requested kind
pub fn build_agent(kind: AgentKind, depth: u8, eval: EvalConfig) -> Box<dyn Agent + Send> {
    match kind {
        AgentKind::Minimax => Box::new(SearchAgent::new(Searcher::minimax(depth).with_eval(eval))),
        AgentKind::AlphaBeta => {
            Box::new(SearchAgent::new(Searcher::alpha_beta(depth).with_eval(eval)))
        }
        AgentKind::Random => Box::new(RandomAgent::new(eval)),
    }
}

/// Agent backed by the fixed-depth tree search
pub struct SearchAgent {
    name: String,
    searcher: Searcher,
}

impl SearchAgent {
    pub fn new(searcher: Searcher) -> Self {
        let label = match searcher.pruning() {
            Pruning::None => "Minimax",
            Pruning::AlphaBeta => "AlphaBeta",
        };
        Self {
            name: format!("{}(depth={})", label, searcher.max_depth()),
            searcher,
        }
    }

    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }
}

impl Agent for SearchAgent {
    fn select_move(&mut self, board: &Board) -> MoveResult {
        let start = Instant::now();
        let result = self.searcher.search(board);
        let search_type = match self.searcher.pruning() {
            Pruning::None => SearchType::Minimax,
            Pruning::AlphaBeta => SearchType::AlphaBeta,
        };
        MoveResult::from_search(result, search_type, start.elapsed().as_millis() as u64)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Plays a uniformly random empty cell
pub struct RandomAgent {
    name: String,
    eval: EvalConfig,
}

impl RandomAgent {
    pub fn new(eval: EvalConfig) -> Self {
        RandomAgent {
            name: "Random".to_string(),
            eval,
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new(EvalConfig::default())
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, board: &Board) -> MoveResult {
        let start = Instant::now();
        let moves = board.legal_moves();
        let best_move = moves.choose(&mut thread_rng()).copied();
        MoveResult {
            best_move,
            score: evaluate_for(board, board.turn(), &self.eval),
            search_type: SearchType::Random,
            time_ms: start.elapsed().as_millis() as u64,
            nodes: 0,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;

    #[test]
    fn test_agent_names() {
        let eval = EvalConfig::default();
        assert_eq!(build_agent(AgentKind::Minimax, 2, eval).name(), "Minimax(depth=2)");
        assert_eq!(build_agent(AgentKind::AlphaBeta, 3, eval).name(), "AlphaBeta(depth=3)");
        assert_eq!(build_agent(AgentKind::Random, 3, eval).name(), "Random");
    }

    #[test]
    fn test_search_agent_takes_win() {
        let board = Board::from_rows(
            &["O....", "O....", "O....", "O....", ".XXX."],
            Stone::O,
        )
        .unwrap();
        for kind in [AgentKind::Minimax, AgentKind::AlphaBeta] {
            let mut agent = build_agent(kind, 1, EvalConfig::default());
            let result = agent.select_move(&board);
            assert_eq!(result.best_move, Some(Pos::new(4, 0)));
            assert!(result.nodes > 0);
        }
    }

    #[test]
    fn test_search_type_reported() {
        let board = Board::new(5).unwrap();
        let mut minimax = SearchAgent::new(Searcher::minimax(1));
        assert_eq!(minimax.select_move(&board).search_type, SearchType::Minimax);
        let mut random = RandomAgent::default();
        assert_eq!(random.select_move(&board).search_type, SearchType::Random);
    }

    #[test]
    fn test_random_agent_plays_only_legal_moves() {
        let board = Board::from_rows(&["XO.", "OX.", "XOX"], Stone::O).unwrap();
        let mut agent = RandomAgent::default();
        for _ in 0..20 {
            let pos = agent.select_move(&board).best_move.unwrap();
            assert!(board.is_empty(pos));
        }
    }

    #[test]
    fn test_agents_return_none_on_full_board() {
        let board = Board::from_rows(&["XO", "OX"], Stone::X).unwrap();
        for kind in [AgentKind::Minimax, AgentKind::AlphaBeta, AgentKind::Random] {
            let mut agent = build_agent(kind, 2, EvalConfig::default());
            assert_eq!(agent.select_move(&board).best_move, None);
        }
    }
}
