//! Game rules for Gomoku
//!
//! Standard free-style Gomoku: the first player with five stones in a
//! horizontal, vertical or diagonal line wins; a full board with no five
//! is a draw.

pub mod win;

// Re-exports for convenient access
pub use win::{check_winner, find_five_positions, game_status, has_five_in_row, GameStatus};
