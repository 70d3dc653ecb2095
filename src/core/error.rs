//! Error types.
//!
//! Move application has exactly one failure mode, [`ReversiError::InvalidMove`],
//! which is always recoverable: the board is left untouched and the caller
//! may try another action. The remaining variants belong to construction,
//! serialization and replay.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvalidMoveReason {
    /// The target cell already holds a piece.
    Occupied,
    /// No direction captures an opponent run.
    NoCapture,
    /// The coordinate (or decoded action) lies off the board.
    OutOfBounds,
}

impl std::fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMoveReason::Occupied => write!(f, "cell is occupied"),
            InvalidMoveReason::NoCapture => write!(f, "no opponent pieces captured"),
            InvalidMoveReason::OutOfBounds => write!(f, "off the board"),
        }
    }
}

/// Errors raised by the engine.
#[derive(Debug, Error)]
pub enum ReversiError {
    #[error("invalid move at ({row}, {col}): {reason}")]
    InvalidMove {
        row: usize,
        col: usize,
        reason: InvalidMoveReason,
    },

    #[error("invalid board size {0}: must be even and between 4 and 26")]
    InvalidBoardSize(usize),

    #[error("grid has {actual} cells, expected {expected}")]
    GridMismatch { expected: usize, actual: usize },

    #[error("invalid cell value {0}: must be -1, 0 or 1")]
    InvalidCellValue(i8),

    #[error("invalid win bonus {0}: must be finite and non-negative")]
    InvalidWinBonus(f64),

    #[error("replay diverged from the log at record {index}")]
    ReplayDiverged { index: usize },

    #[error("encoding error: {0}")]
    Codec(#[from] bincode::Error),
}

impl ReversiError {
    /// Check if this is a recoverable move rejection.
    #[must_use]
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, ReversiError::InvalidMove { .. })
    }
}

/// Convenience result type for engine operations.
pub type Result<T> = std::result::Result<T, ReversiError>;
