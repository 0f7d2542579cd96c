//! Win condition checking
//!
//! A player wins with five or more stones in a row in any of the four line
//! orientations. Overlines count.

use crate::board::{Board, Pos, Stone, WIN_LENGTH};

/// Direction vectors for line checking (4 directions)
pub(crate) const DIRECTIONS: [(i64, i64); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Outcome of a position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// The given stone has five in a row
    Win(Stone),
    /// Board is full and nobody has five in a row
    Draw,
    Ongoing,
}

/// Check if there's 5+ in a row for the given color
pub fn has_five_in_row(board: &Board, stone: Stone) -> bool {
    find_five_positions(board, stone).is_some()
}

/// Find the first five-in-a-row of `stone`.
///
/// Stones are visited in row-major order and directions in
/// horizontal, vertical, SE, SW order. Returns the five cells starting at
/// the run's first stone.
pub fn find_five_positions(board: &Board, stone: Stone) -> Option<[Pos; WIN_LENGTH]> {
    let stones = board.stones(stone)?;
    let size = board.size();

    for idx in stones.iter_ones() {
        let pos = Pos::from_index(idx, size);
        for &(dr, dc) in &DIRECTIONS {
            let mut line = [pos; WIN_LENGTH];
            let mut complete = true;
            for (k, slot) in line.iter_mut().enumerate().skip(1) {
                match pos.offset(dr, dc, k as i64, size) {
                    Some(next) if board.get(next) == stone => *slot = next,
                    _ => {
                        complete = false;
                        break;
                    }
                }
            }
            if complete {
                return Some(line);
            }
        }
    }
    None
}

/// Check for a winner. O is checked before X.
pub fn check_winner(board: &Board) -> Option<Stone> {
    [Stone::O, Stone::X]
        .into_iter()
        .find(|&stone| has_five_in_row(board, stone))
}

/// Win, draw or still in progress
pub fn game_status(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        return GameStatus::Win(winner);
    }
    if board.is_full() {
        return GameStatus::Draw;
    }
    GameStatus::Ongoing
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_in_row_horizontal() {
        let board = Board::from_rows(
            &["......", "XXXXX.", "......", "......", "......", "......"],
            Stone::O,
        )
        .unwrap();
        assert!(has_five_in_row(&board, Stone::X));
        assert!(!has_five_in_row(&board, Stone::O));
        assert_eq!(
            find_five_positions(&board, Stone::X),
            Some([
                Pos::new(1, 0),
                Pos::new(1, 1),
                Pos::new(1, 2),
                Pos::new(1, 3),
                Pos::new(1, 4)
            ])
        );
    }

    #[test]
    fn test_five_in_row_vertical() {
        let board = Board::from_rows(&["O....", "O....", "O....", "O....", "O...."], Stone::X)
            .unwrap();
        assert!(has_five_in_row(&board, Stone::O));
        assert_eq!(game_status(&board), GameStatus::Win(Stone::O));
    }

    #[test]
    fn test_five_in_row_major_diagonal() {
        let board = Board::from_rows(&["X....", ".X...", "..X..", "...X.", "....X"], Stone::O)
            .unwrap();
        assert!(has_five_in_row(&board, Stone::X));
    }

    #[test]
    fn test_five_in_row_minor_diagonal() {
        let board = Board::from_rows(
            &[".....O", "....O.", "...O..", "..O...", ".O....", "......"],
            Stone::X,
        )
        .unwrap();
        assert!(has_five_in_row(&board, Stone::O));
        let line = find_five_positions(&board, Stone::O).unwrap();
        assert_eq!(line[0], Pos::new(0, 5));
        assert_eq!(line[4], Pos::new(4, 1));
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let board = Board::from_rows(
            &["XXXXXX", "......", "......", "......", "......", "......"],
            Stone::O,
        )
        .unwrap();
        assert!(has_five_in_row(&board, Stone::X));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let board = Board::from_rows(&["XXXX.", ".....", ".....", ".....", "....."], Stone::O)
            .unwrap();
        assert!(!has_five_in_row(&board, Stone::X));
        assert_eq!(game_status(&board), GameStatus::Ongoing);
    }

    #[test]
    fn test_line_does_not_wrap_around_edges() {
        // Row-major neighbours across a row break must not count as a line
        let board = Board::from_rows(&["...XX", "XXX..", ".....", ".....", "....."], Stone::O)
            .unwrap();
        assert!(!has_five_in_row(&board, Stone::X));
    }

    #[test]
    fn test_small_board_never_wins() {
        let board = Board::from_rows(&["XXXX", "OOOO", "XXXX", "OOOO"], Stone::X).unwrap();
        assert_eq!(check_winner(&board), None);
        assert_eq!(game_status(&board), GameStatus::Draw);
    }

    #[test]
    fn test_full_board_without_five_is_draw() {
        let board = Board::from_rows(
            &["XXOOX", "OOXXO", "XXOOX", "OOXXO", "XXOOX"],
            Stone::O,
        )
        .unwrap();
        assert!(board.is_full());
        assert_eq!(check_winner(&board), None);
        assert_eq!(game_status(&board), GameStatus::Draw);
    }

    #[test]
    fn test_full_board_with_five_is_win() {
        let board = Board::from_rows(
            &["XXXXX", "OOXXO", "XOOOX", "OOXXO", "XXOOO"],
            Stone::O,
        )
        .unwrap();
        assert_eq!(game_status(&board), GameStatus::Win(Stone::X));
    }

    #[test]
    fn test_o_checked_before_x() {
        let board = Board::from_rows(
            &["XXXXX", "OOOOO", ".....", ".....", "....."],
            Stone::X,
        )
        .unwrap();
        assert_eq!(check_winner(&board), Some(Stone::O));
    }
}
