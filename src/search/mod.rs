//! Search module for Gomoku AI
//!
//! Fixed-depth adversarial tree search over a [`Board`](crate::Board).
//! Plain minimax and alpha-beta share one recursion; the [`Pruning`] policy
//! decides whether sibling cutoffs are taken.

pub mod alphabeta;

pub use alphabeta::{Pruning, SearchResult, SearchStats, Searcher, INF};
