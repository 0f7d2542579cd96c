//! Minimax search with optional alpha-beta pruning
//!
//! # Shape of the search
//!
//! - Every legal move at the root is applied and scored by a minimizing ply
//!   searched to the full `max_depth`, so the tree spans `max_depth + 1`
//!   plies below the root position.
//! - Leaves are positions at depth 0 or terminal positions. They are scored
//!   with [`evaluate_for`] from the root player's point of view.
//! - The root keeps the first move with the strictly greatest score.
//! - With [`Pruning::AlphaBeta`] each root move gets a fresh `(-INF, INF)`
//!   window and a node stops expanding siblings once `alpha >= beta`,
//!   returning the best score seen so far.
//!
//! Moves are applied through [`Board::scoped_move`], so every apply is undone
//! before control returns to the parent ply.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos, Stone};
//! use gomoku::search::Searcher;
//!
//! let board = Board::from_rows(
//!     &["O....", "O....", "O....", "O....", ".XXX."],
//!     Stone::O,
//! ).unwrap();
//!
//! let result = Searcher::alpha_beta(1).search(&board);
//! assert_eq!(result.best_move, Some(Pos::new(4, 0)));
//! ```

use std::time::Instant;

use crate::board::{Board, Pos, Stone};
use crate::eval::{evaluate_for, EvalConfig, PatternScore};

/// Infinity score for alpha-beta bounds
pub const INF: i32 = PatternScore::WIN + 1;

/// Whether sibling moves may be skipped once the bounds cross
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pruning {
    /// Plain minimax: every node expands all of its moves
    None,
    #[default]
    AlphaBeta,
}

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions scored by the heuristic
    pub leaf_evaluations: u64,
    /// Nodes that stopped expanding siblings early
    pub cutoffs: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, `None` when the root has no legal move
    pub best_move: Option<Pos>,
    /// Score of the best move from the root player's point of view
    pub score: i32,
    /// Configured depth the search ran with
    pub depth: u8,
    /// Total nodes visited, root excluded
    pub nodes: u64,
    pub stats: SearchStats,
}

/// Fixed-depth searcher. Holds configuration only; each call starts a fresh
/// tree walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Searcher {
    max_depth: u8,
    pruning: Pruning,
    eval: EvalConfig,
}

impl Searcher {
    /// Create a searcher. A depth of 0 is raised to 1.
    #[must_use]
    pub fn new(max_depth: u8, pruning: Pruning) -> Self {
        Self {
            max_depth: max_depth.max(1),
            pruning,
            eval: EvalConfig::default(),
        }
    }

    #[must_use]
    pub fn minimax(max_depth: u8) -> Self {
        Self::new(max_depth, Pruning::None)
    }

    #[must_use]
    pub fn alpha_beta(max_depth: u8) -> Self {
        Self::new(max_depth, Pruning::AlphaBeta)
    }

    /// Use a different evaluation configuration
    #[must_use]
    pub fn with_eval(mut self, eval: EvalConfig) -> Self {
        self.eval = eval;
        self
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    pub fn pruning(&self) -> Pruning {
        self.pruning
    }

    pub fn eval_config(&self) -> EvalConfig {
        self.eval
    }

    /// Search a private copy of `board` for the side to move.
    #[must_use]
    pub fn search(&self, board: &Board) -> SearchResult {
        let mut work_board = board.clone();
        self.search_in_place(&mut work_board)
    }

    /// Search directly on `board`. The board is back in its original state
    /// when this returns.
    pub fn search_in_place(&self, board: &mut Board) -> SearchResult {
        let start = Instant::now();
        let mut walk = TreeWalk {
            root: board.turn(),
            eval: self.eval,
            pruning: self.pruning,
            nodes: 0,
            stats: SearchStats::default(),
        };

        let mut best_move = None;
        let mut best_score = -INF;

        for mov in board.legal_moves() {
            let Ok(mut child) = board.scoped_move(mov) else {
                debug_assert!(false, "legal move {mov} was rejected");
                continue;
            };
            let score = walk.score(&mut child, self.max_depth, -INF, INF, false);
            drop(child);

            if score > best_score {
                best_score = score;
                best_move = Some(mov);
            }
        }

        if best_move.is_none() {
            best_score = evaluate_for(board, walk.root, &self.eval);
        }

        log::debug!(
            "{:?} depth {} for {:?}: {:?} score {} ({} nodes, {} leaves, {} cutoffs, {} ms)",
            self.pruning,
            self.max_depth,
            walk.root,
            best_move,
            best_score,
            walk.nodes,
            walk.stats.leaf_evaluations,
            walk.stats.cutoffs,
            start.elapsed().as_millis()
        );

        SearchResult {
            best_move,
            score: best_score,
            depth: self.max_depth,
            nodes: walk.nodes,
            stats: walk.stats,
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::alpha_beta(2)
    }
}

/// Per-call search state
struct TreeWalk {
    root: Stone,
    eval: EvalConfig,
    pruning: Pruning,
    nodes: u64,
    stats: SearchStats,
}

impl TreeWalk {
    fn score(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 || board.is_terminal() {
            self.stats.leaf_evaluations += 1;
            return evaluate_for(board, self.root, &self.eval);
        }

        let mut best = if maximizing { -INF } else { INF };

        for mov in board.legal_moves() {
            let Ok(mut child) = board.scoped_move(mov) else {
                debug_assert!(false, "legal move {mov} was rejected");
                continue;
            };
            let score = self.score(&mut child, depth - 1, alpha, beta, !maximizing);
            drop(child);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if self.pruning == Pruning::AlphaBeta && alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::LineScan;

    fn board(rows: &[&str], turn: Stone) -> Board {
        Board::from_rows(rows, turn).unwrap()
    }

    #[test]
    fn test_search_finds_winning_move_for_x() {
        let b = board(&["X...O", "X...O", "X.O..", "X....", "....."], Stone::X);
        for searcher in [Searcher::minimax(1), Searcher::alpha_beta(1)] {
            let result = searcher.search(&b);
            assert_eq!(result.best_move, Some(Pos::new(4, 0)));
            assert_eq!(result.score, PatternScore::WIN);
        }
    }

    #[test]
    fn test_search_finds_winning_move_for_o() {
        let b = board(&[".....", "OOOO.", "X....", "X....", "X...."], Stone::O);
        let result = Searcher::minimax(1).search(&b);
        assert_eq!(result.best_move, Some(Pos::new(1, 4)));
        assert_eq!(result.score, PatternScore::WIN);
    }

    #[test]
    fn test_search_blocks_opponent_win() {
        // X threatens (4, 0); every other O move loses at the next ply
        let b = board(&["X...O", "X...O", "X....", "X....", "....."], Stone::O);
        let result = Searcher::alpha_beta(1).search(&b);
        assert_eq!(result.best_move, Some(Pos::new(4, 0)));
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let mut b = board(&["X.O..", ".X...", "..O..", ".....", "....."], Stone::X);
        let before = b.clone();
        let result = Searcher::minimax(2).search_in_place(&mut b);
        assert!(result.best_move.is_some());
        assert_eq!(b, before);

        let result = Searcher::alpha_beta(2).search_in_place(&mut b);
        assert!(result.best_move.is_some());
        assert_eq!(b, before);
    }

    #[test]
    fn test_search_on_full_board_returns_none() {
        let b = board(&["XO", "OX"], Stone::X);
        let result = Searcher::alpha_beta(2).search(&b);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 0);
        assert_eq!(result.score, PatternScore::DRAW);
    }

    #[test]
    fn test_first_move_wins_ties() {
        // On an empty 3x3 board nothing can ever score, so every move ties.
        // The ongoing bonus is O's, so X sees it negated.
        let b = Board::new(3).unwrap();
        let result = Searcher::minimax(1).search(&b);
        assert_eq!(result.best_move, Some(Pos::new(0, 0)));
        assert_eq!(result.score, -PatternScore::ONGOING);
    }

    #[test]
    fn test_alpha_beta_matches_minimax() {
        let positions = [
            board(&["X....", ".O...", "..X..", ".....", "....."], Stone::O),
            board(&["XX...", "OO...", "X.O..", ".....", "....."], Stone::X),
            board(&["X.O.X", ".OX..", "..XO.", "O....", "....X"], Stone::O),
        ];
        for b in &positions {
            for depth in 1..=2 {
                let plain = Searcher::minimax(depth).search(b);
                let pruned = Searcher::alpha_beta(depth).search(b);
                assert_eq!(plain.best_move, pruned.best_move, "depth {depth}");
                assert_eq!(plain.score, pruned.score, "depth {depth}");
                assert!(pruned.nodes <= plain.nodes);
                assert_eq!(plain.stats.cutoffs, 0);
            }
        }
    }

    #[test]
    fn test_alpha_beta_prunes() {
        let b = board(&["X....", ".O...", "..X..", ".....", "....."], Stone::O);
        let plain = Searcher::minimax(2).search(&b);
        let pruned = Searcher::alpha_beta(2).search(&b);
        assert!(pruned.stats.cutoffs > 0);
        assert!(pruned.nodes < plain.nodes);
    }

    #[test]
    fn test_eval_config_changes_choice() {
        // Only a horizontal threat exists; the vertical-only scan cannot see it
        let b = board(
            &["......", "......", "......", ".XXX..", "......", "O....."],
            Stone::O,
        );
        let vertical = Searcher::minimax(1).search(&b);
        let all = Searcher::minimax(1)
            .with_eval(EvalConfig::new(LineScan::AllDirections))
            .search(&b);
        assert_eq!(vertical.score, PatternScore::ONGOING);
        assert!(all.score < PatternScore::ONGOING);
    }

    #[test]
    fn test_zero_depth_is_raised() {
        assert_eq!(Searcher::minimax(0).max_depth(), 1);
        assert_eq!(Searcher::default().pruning(), Pruning::AlphaBeta);
    }
}
