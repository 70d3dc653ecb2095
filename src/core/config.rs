//! Environment configuration.
//!
//! Callers configure an environment at construction time with `EnvConfig`.
//! Everything else about the game (the opening position, the reward sign
//! convention, the action encoding) is fixed.

use serde::{Deserialize, Serialize};

use super::error::{Result, ReversiError};

/// Standard board size.
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Smallest supported board.
pub const MIN_BOARD_SIZE: usize = 4;

/// Largest supported board (one column letter per file in `Display`).
pub const MAX_BOARD_SIZE: usize = 26;

/// Reward added (Player A wins) or subtracted (Player B wins) on the terminal step.
pub const DEFAULT_WIN_BONUS: f64 = 100.0;

/// Environment configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnvConfig {
    /// Board side length. Must be even, within `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
    pub board_size: usize,

    /// Terminal reward adjustment, applied from Player A's perspective.
    pub win_bonus: f64,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            win_bonus: DEFAULT_WIN_BONUS,
        }
    }
}

impl EnvConfig {
    /// Create a new config with a custom board size.
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Create a new config with a custom terminal bonus.
    #[must_use]
    pub fn with_win_bonus(mut self, bonus: f64) -> Self {
        self.win_bonus = bonus;
        self
    }

    /// Number of discrete actions (`board_size²`).
    #[must_use]
    pub fn action_count(&self) -> usize {
        self.board_size * self.board_size
    }

    /// Check the config describes a playable environment.
    pub fn validate(&self) -> Result<()> {
        validate_board_size(self.board_size)?;
        if !self.win_bonus.is_finite() || self.win_bonus < 0.0 {
            return Err(ReversiError::InvalidWinBonus(self.win_bonus));
        }
        Ok(())
    }
}

/// Check that `size` is a supported board size.
pub fn validate_board_size(size: usize) -> Result<()> {
    if size % 2 != 0 || !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        return Err(ReversiError::InvalidBoardSize(size));
    }
    Ok(())
}
