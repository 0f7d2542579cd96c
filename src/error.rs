//! Error types for the Gomoku engine and its drivers

use thiserror::Error;

/// Errors produced by move validation, input parsing and configuration.
///
/// Move and input errors are recoverable: drivers report them and ask for
/// another move. The search never produces them because it only plays moves
/// taken from `Board::legal_moves`.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GomokuError {
    #[error("({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: i64, col: i64, size: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: u8, col: u8 },

    #[error("malformed input '{input}': {reason}")]
    MalformedInput { input: String, reason: String },

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("config format error: {0}")]
    ConfigFormat(#[from] serde_yaml_ng::Error),
}

impl GomokuError {
    pub(crate) fn malformed(input: impl Into<String>, reason: impl Into<String>) -> Self {
        GomokuError::MalformedInput {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// True for errors a human can fix by entering a different move.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GomokuError::OutOfBounds { .. }
                | GomokuError::CellOccupied { .. }
                | GomokuError::MalformedInput { .. }
        )
    }
}

/// Convenience type alias for Results using the crate's error type
pub type Result<T> = std::result::Result<T, GomokuError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GomokuError::OutOfBounds { row: -1, col: 3, size: 10 };
        assert_eq!(err.to_string(), "(-1, 3) is outside the 10x10 board");

        let err = GomokuError::CellOccupied { row: 2, col: 4 };
        assert_eq!(err.to_string(), "cell (2, 4) is already occupied");

        let err = GomokuError::malformed("abc", "expected two integers");
        assert_eq!(err.to_string(), "malformed input 'abc': expected two integers");
    }

    #[test]
    fn test_recoverable_classification() {
        assert!(GomokuError::CellOccupied { row: 0, col: 0 }.is_recoverable());
        assert!(GomokuError::malformed("x", "y").is_recoverable());
        assert!(!GomokuError::InvalidConfig { message: "bad".into() }.is_recoverable());
    }
}
