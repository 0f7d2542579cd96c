//! Pattern scores for Gomoku evaluation
//!
//! Scores are from O's point of view: positive favors O, negative favors X.

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five in a row in any direction - game over
    pub const WIN: i32 = 1_000;
    /// Five stones in a graded scan line. Any such line is already a win,
    /// so this tier only fires if the win check is bypassed.
    pub const FIVE_LINE: i32 = 500;
    /// Four consecutive stones in a scanned line
    pub const FOUR: i32 = 100;
    /// Three consecutive stones in a scanned line
    pub const THREE: i32 = 10;
    /// Full board, nobody won
    pub const DRAW: i32 = 0;
    /// Still playing, no pattern found
    pub const ONGOING: i32 = 1;
}

/// Graded tiers in the order they are tried, as (run length, score)
pub(crate) const GRADED_TIERS: [(usize, i32); 3] = [
    (5, PatternScore::FIVE_LINE),
    (4, PatternScore::FOUR),
    (3, PatternScore::THREE),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_score_hierarchy() {
        assert!(PatternScore::WIN > PatternScore::FIVE_LINE);
        assert!(PatternScore::FIVE_LINE > PatternScore::FOUR);
        assert!(PatternScore::FOUR > PatternScore::THREE);
        assert!(PatternScore::THREE > PatternScore::ONGOING);
        assert!(PatternScore::ONGOING > PatternScore::DRAW);
    }

    #[test]
    fn test_graded_tiers_descend() {
        for pair in GRADED_TIERS.windows(2) {
            assert!(pair[0].0 > pair[1].0);
            assert!(pair[0].1 > pair[1].1);
        }
    }
}
