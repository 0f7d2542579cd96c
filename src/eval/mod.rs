//! Evaluation module for Gomoku positions
//!
//! The score is a layered rule table: a win anywhere dominates, then graded
//! runs of five, four and three stones. The first rule that matches decides
//! the score; nothing is accumulated across lines.

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, evaluate_for, EvalConfig, LineScan};
pub use patterns::PatternScore;
