//! Scoped move application

use std::ops::{Deref, DerefMut};

use super::{Board, Pos};

/// A move that is undone when the guard goes out of scope.
///
/// Created by [`Board::scoped_move`]. While the guard lives the board is
/// reachable only through it, so nested guards always drop in reverse order
/// of creation and every apply is paired with exactly one revert.
pub struct MoveGuard<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl<'a> MoveGuard<'a> {
    pub(super) fn new(board: &'a mut Board, pos: Pos) -> Self {
        Self { board, pos }
    }

    /// The move this guard holds
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for MoveGuard<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        self.board.revert_move(self.pos);
    }
}
