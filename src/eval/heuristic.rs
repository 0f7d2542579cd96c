//! Heuristic evaluation function for Gomoku board positions
//!
//! Rules are tried in priority order and the first match returns:
//! 1. five in a row anywhere (either player) -> `WIN`
//! 2. five consecutive stones in a scanned line -> `FIVE_LINE`
//! 3. four consecutive stones in a scanned line -> `FOUR`
//! 4. three consecutive stones in a scanned line -> `THREE`
//! 5. full board -> `DRAW`
//! 6. otherwise -> `ONGOING`
//!
//! Within each tier O is tested before X. Which lines count as "scanned" for
//! tiers 2-4 is controlled by [`LineScan`].

use serde::{Deserialize, Serialize};

use crate::board::{Board, Pos, Stone};
use crate::rules::{has_five_in_row, win::DIRECTIONS};

use super::patterns::{PatternScore, GRADED_TIERS};

/// Which line orientations the graded (non-winning) tiers look at.
///
/// `VerticalOnly` reproduces the classic behavior where only column runs are
/// graded; horizontal and diagonal runs short of five score nothing.
/// `AllDirections` grades runs in all four orientations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineScan {
    #[default]
    VerticalOnly,
    AllDirections,
}

impl LineScan {
    fn directions(self) -> &'static [(i64, i64)] {
        match self {
            LineScan::VerticalOnly => &[(1, 0)],
            LineScan::AllDirections => &DIRECTIONS,
        }
    }
}

/// Evaluation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EvalConfig {
    pub scan: LineScan,
}

impl EvalConfig {
    pub fn new(scan: LineScan) -> Self {
        Self { scan }
    }
}

/// Evaluate the board from O's perspective.
///
/// Positive values favor O, negative values favor X.
#[must_use]
pub fn evaluate(board: &Board, config: &EvalConfig) -> i32 {
    if has_five_in_row(board, Stone::O) {
        return PatternScore::WIN;
    }
    if has_five_in_row(board, Stone::X) {
        return -PatternScore::WIN;
    }

    let directions = config.scan.directions();
    for (len, score) in GRADED_TIERS {
        if has_run(board, Stone::O, len, directions) {
            return score;
        }
        if has_run(board, Stone::X, len, directions) {
            return -score;
        }
    }

    if board.is_full() {
        return PatternScore::DRAW;
    }
    PatternScore::ONGOING
}

/// Evaluate the board from `stone`'s perspective.
#[must_use]
pub fn evaluate_for(board: &Board, stone: Stone, config: &EvalConfig) -> i32 {
    let score = evaluate(board, config);
    match stone {
        Stone::X => -score,
        _ => score,
    }
}

/// Does `stone` own `len` consecutive cells along any of `directions`?
fn has_run(board: &Board, stone: Stone, len: usize, directions: &[(i64, i64)]) -> bool {
    let Some(stones) = board.stones(stone) else {
        return false;
    };
    let size = board.size();

    stones.iter_ones().any(|idx| {
        let start = Pos::from_index(idx, size);
        directions.iter().any(|&(dr, dc)| {
            (1..len as i64).all(|k| {
                start
                    .offset(dr, dc, k, size)
                    .is_some_and(|p| board.get(p) == stone)
            })
        })
    })
}
