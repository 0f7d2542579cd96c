//! End-to-end game scenarios through the public API

use gomoku::{
    evaluate, Board, EvalConfig, GameStatus, GomokuError, LineScan, PatternScore, Pos, Searcher,
    Stone,
};

fn play(board: &mut Board, moves: &[(u8, u8)]) {
    for &(row, col) in moves {
        board.apply_move(Pos::new(row, col)).unwrap();
    }
}

#[test]
fn test_horizontal_four_under_both_scans() {
    let mut board = Board::new(5).unwrap();
    // X on row 0, O scattered without any run
    play(
        &mut board,
        &[(0, 0), (2, 0), (0, 1), (4, 2), (0, 2), (2, 4), (0, 3)],
    );
    assert_eq!(board.turn(), Stone::O);
    assert_eq!(board.status(), GameStatus::Ongoing);

    let vertical = EvalConfig::new(LineScan::VerticalOnly);
    assert_eq!(evaluate(&board, &vertical), PatternScore::ONGOING);

    let all = EvalConfig::new(LineScan::AllDirections);
    assert_eq!(evaluate(&board, &all), -PatternScore::FOUR);
}

#[test]
fn test_vertical_four_scores_under_default_scan() {
    let board = Board::from_rows(&["X....", "X....", "X....", "X...O", "...OO"], Stone::O).unwrap();
    assert_eq!(evaluate(&board, &EvalConfig::default()), -PatternScore::FOUR);
}

#[test]
fn test_full_board_without_five_is_draw() {
    let board = Board::from_rows(
        &[
            "XXOOXX", "OOXXOO", "XXOOXX", "OOXXOO", "XXOOXX", "OOXXOO",
        ],
        Stone::X,
    )
    .unwrap();
    assert!(board.legal_moves().is_empty());
    assert!(board.is_terminal());
    assert_eq!(board.status(), GameStatus::Draw);
}

#[test]
fn test_column_of_o_wins_whatever_the_turn() {
    for turn in [Stone::X, Stone::O] {
        let board =
            Board::from_rows(&["O....", "O....", "O....", "O....", "O...."], turn).unwrap();
        assert_eq!(board.status(), GameStatus::Win(Stone::O));
        assert!(board.is_terminal());
    }
}

#[test]
fn test_depth_one_takes_immediate_win() {
    let board =
        Board::from_rows(&["XXXX.", "O....", "O....", "O....", "....."], Stone::X).unwrap();
    for searcher in [Searcher::minimax(1), Searcher::alpha_beta(1)] {
        let result = searcher.search(&board);
        assert_eq!(result.best_move, Some(Pos::new(0, 4)));
        assert_eq!(result.score, PatternScore::WIN);
    }
}

#[test]
fn test_bad_moves_are_rejected_and_board_kept() {
    let mut board = Board::new(5).unwrap();
    board.apply_move(Pos::new(1, 1)).unwrap();
    let before = board.clone();

    assert!(matches!(
        board.apply_move(Pos::new(1, 1)),
        Err(GomokuError::CellOccupied { row: 1, col: 1 })
    ));
    assert!(matches!(
        board.checked_pos(5, 0),
        Err(GomokuError::OutOfBounds { row: 5, col: 0, size: 5 })
    ));
    assert!(matches!(board.checked_pos(0, -1), Err(GomokuError::OutOfBounds { .. })));
    assert_eq!(board, before);
}

#[test]
fn test_agents_play_a_full_game() {
    let mut board = Board::new(6).unwrap();
    let x = Searcher::alpha_beta(1);
    let o = Searcher::minimax(1);

    while !board.is_terminal() {
        let searcher = if board.turn() == Stone::X { &x } else { &o };
        let pos = searcher.search(&board).best_move.unwrap();
        board.apply_move(pos).unwrap();
    }
    assert_ne!(board.status(), GameStatus::Ongoing);
}
