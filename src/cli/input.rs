//! Parsing of typed moves

use crate::error::{GomokuError, Result};

/// Parse `row col` or `row,col` into raw coordinates.
///
/// Bounds are not checked here; that is [`Board::checked_pos`]'s job.
///
/// [`Board::checked_pos`]: crate::board::Board::checked_pos
pub fn parse_move(line: &str) -> Result<(i64, i64)> {
    let input = line.trim();
    let parts: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();

    let [row, col] = parts.as_slice() else {
        return Err(GomokuError::malformed(input, "expected a row and a column"));
    };

    let parse = |part: &str| {
        part.parse::<i64>()
            .map_err(|_| GomokuError::malformed(input, format!("'{part}' is not an integer")))
    };
    Ok((parse(*row)?, parse(*col)?))
}
