//! Board structure with turn tracking

use super::bitboard::Bitboard;
use super::guard::MoveGuard;
use super::{Pos, Stone, MAX_BOARD_SIZE};
use crate::error::{GomokuError, Result};
use crate::rules::{self, GameStatus};

/// Game board: an N x N grid plus the side to move.
///
/// The grid only changes through [`Board::apply_move`] (Empty -> stone) and
/// [`Board::revert_move`] (stone -> Empty). Both flip the turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// X stones bitboard
    x: Bitboard,
    /// O stones bitboard
    o: Bitboard,
    size: usize,
    /// Player to move next, never `Stone::Empty`
    turn: Stone,
}

impl Board {
    /// Create an empty `size` x `size` board with X to move.
    ///
    /// Sizes outside `1..=MAX_BOARD_SIZE` are rejected.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(GomokuError::InvalidConfig {
                message: format!("board size must be between 1 and {MAX_BOARD_SIZE}, got {size}"),
            });
        }
        let cells = size * size;
        Ok(Self {
            x: Bitboard::new(cells),
            o: Bitboard::new(cells),
            size,
            turn: Stone::X,
        })
    }

    /// Build a position from text rows.
    ///
    /// `X` and `O` are stones; `.`, `-`, `_` and spaces are empty cells.
    /// Every row must have as many cells as there are rows.
    pub fn from_rows(rows: &[&str], turn: Stone) -> Result<Self> {
        if turn == Stone::Empty {
            return Err(GomokuError::malformed("Empty", "turn must be X or O"));
        }
        let mut board = Board::new(rows.len())?;
        board.turn = turn;
        for (r, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().collect();
            if cells.len() != board.size {
                return Err(GomokuError::malformed(
                    *line,
                    format!("expected {} cells, got {}", board.size, cells.len()),
                ));
            }
            for (c, ch) in cells.into_iter().enumerate() {
                let idx = r * board.size + c;
                match ch.to_ascii_uppercase() {
                    'X' => board.x.set(idx),
                    'O' => board.o.set(idx),
                    '.' | '-' | '_' | ' ' => {}
                    other => {
                        return Err(GomokuError::malformed(
                            *line,
                            format!("unexpected cell character '{other}'"),
                        ))
                    }
                }
            }
        }
        Ok(board)
    }

    /// An empty board of the same size with X to move
    pub fn cleared(&self) -> Board {
        let cells = self.size * self.size;
        Board {
            x: Bitboard::new(cells),
            o: Bitboard::new(cells),
            size: self.size,
            turn: Stone::X,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Player to move next
    #[inline]
    pub fn turn(&self) -> Stone {
        self.turn
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        let idx = pos.to_index(self.size);
        if self.x.get(idx) {
            Stone::X
        } else if self.o.get(idx) {
            Stone::O
        } else {
            Stone::Empty
        }
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    /// Convert raw coordinates (e.g. from a human) into a position on this board
    pub fn checked_pos(&self, row: i64, col: i64) -> Result<Pos> {
        if Pos::is_valid(row, col, self.size) {
            Ok(Pos::new(row as u8, col as u8))
        } else {
            Err(GomokuError::OutOfBounds { row, col, size: self.size })
        }
    }

    /// Place the current player's stone at `pos` and pass the turn.
    ///
    /// Fails without touching the board if `pos` is off the board or taken.
    pub fn apply_move(&mut self, pos: Pos) -> Result<()> {
        if !self.contains(pos) {
            return Err(GomokuError::OutOfBounds {
                row: pos.row as i64,
                col: pos.col as i64,
                size: self.size,
            });
        }
        if !self.is_empty(pos) {
            return Err(GomokuError::CellOccupied { row: pos.row, col: pos.col });
        }
        let idx = pos.to_index(self.size);
        let turn = self.turn;
        if let Some(stones) = self.stones_mut(turn) {
            stones.set(idx);
        }
        self.turn = turn.opponent();
        Ok(())
    }

    /// Clear `pos` and pass the turn back.
    ///
    /// Precondition: `pos` holds the stone placed by the most recent
    /// unreverted `apply_move`. This is not checked in release builds;
    /// reverting anything else leaves the turn inconsistent with the grid.
    pub fn revert_move(&mut self, pos: Pos) {
        debug_assert!(self.contains(pos), "revert of off-board {pos}");
        debug_assert_eq!(
            self.get(pos),
            self.turn.opponent(),
            "revert of {pos} does not undo the previous move"
        );
        let idx = pos.to_index(self.size);
        self.x.clear(idx);
        self.o.clear(idx);
        self.turn = self.turn.opponent();
    }

    /// Apply a move and return a guard that reverts it when dropped.
    pub fn scoped_move(&mut self, pos: Pos) -> Result<MoveGuard<'_>> {
        self.apply_move(pos)?;
        Ok(MoveGuard::new(self, pos))
    }

    /// All empty cells in row-major order, recomputed on every call
    pub fn legal_moves(&self) -> Vec<Pos> {
        self.occupied()
            .iter_zeros()
            .map(|idx| Pos::from_index(idx, self.size))
            .collect()
    }

    fn occupied(&self) -> Bitboard {
        self.x.union(&self.o)
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::X => Some(&self.x),
            Stone::O => Some(&self.o),
            Stone::Empty => None,
        }
    }

    #[inline]
    fn stones_mut(&mut self, stone: Stone) -> Option<&mut Bitboard> {
        match stone {
            Stone::X => Some(&mut self.x),
            Stone::O => Some(&mut self.o),
            Stone::Empty => None,
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.x.count() + self.o.count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == self.size * self.size
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.x.is_empty() && self.o.is_empty()
    }

    /// Win, draw or still in progress
    pub fn status(&self) -> GameStatus {
        rules::game_status(self)
    }

    /// True once either player has five in a row or no empty cell is left
    pub fn is_terminal(&self) -> bool {
        self.status() != GameStatus::Ongoing
    }

    /// Rows of the grid, top to bottom, for renderers
    pub fn rows(&self) -> impl Iterator<Item = Vec<Stone>> + '_ {
        (0..self.size).map(move |r| {
            (0..self.size)
                .map(|c| self.get(Pos::new(r as u8, c as u8)))
                .collect()
        })
    }
}
