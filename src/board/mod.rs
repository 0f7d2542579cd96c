//! Board representation for Gomoku

pub mod bitboard;
pub mod board;
pub mod guard;


// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;
pub use guard::MoveGuard;

/// Largest supported board edge; keeps coordinates within `u8`
pub const MAX_BOARD_SIZE: usize = 32;

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Cell contents. `X` moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    X,
    O,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::X => Stone::O,
            Stone::O => Stone::X,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Single-character symbol used by the text renderer
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Stone::X => 'X',
            Stone::O => 'O',
            Stone::Empty => ' ',
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < MAX_BOARD_SIZE && (col as usize) < MAX_BOARD_SIZE);
        Self { row, col }
    }

    /// Row-major index on a board of the given edge length
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: (idx / size) as u8,
            col: (idx % size) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i64, col: i64, size: usize) -> bool {
        row >= 0 && row < size as i64 && col >= 0 && col < size as i64
    }

    /// Step `k` cells along `(dr, dc)`, returning `None` when leaving the board.
    #[inline]
    pub fn offset(self, dr: i64, dc: i64, k: i64, size: usize) -> Option<Pos> {
        let r = self.row as i64 + dr * k;
        let c = self.col as i64 + dc * k;
        if Pos::is_valid(r, c, size) {
            Some(Pos::new(r as u8, c as u8))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
