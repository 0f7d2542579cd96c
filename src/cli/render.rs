//! Text rendering of the board

use std::fmt::Write;

use crate::board::Board;

/// Render `board` as a grid with row and column labels.
///
/// ```text
///      0   1   2
///    +---+---+---+
///  0 | X |   |   |
///    +---+---+---+
/// ```
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let separator = format!("   +{}", "---+".repeat(size));
    let mut out = String::new();

    let mut header = String::from("    ");
    for col in 0..size {
        let _ = write!(header, "{:^3} ", col);
    }
    out.push_str(header.trim_end());
    out.push('\n');
    out.push_str(&separator);
    out.push('\n');

    for (row, cells) in board.rows().enumerate() {
        let _ = write!(out, "{:>2} |", row);
        for stone in cells {
            let _ = write!(out, " {} |", stone.symbol());
        }
        out.push('\n');
        out.push_str(&separator);
        out.push('\n');
    }
    out
}
