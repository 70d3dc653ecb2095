//! Action representation: board coordinates and flat action indices.
//!
//! Actions are flat integers in `[0, size²)`, decoded row-major:
//! `row = action / size`, `col = action % size`. This mapping is part of
//! the external contract, so serialized action logs stay interchangeable
//! across implementations.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// A board coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Decode a flat action index for a board of the given size.
    ///
    /// The result may lie outside the board when `action >= size * size`;
    /// use [`Coord::in_bounds`] to check.
    ///
    /// ```
    /// use reversi_env::core::Coord;
    ///
    /// assert_eq!(Coord::from_action(19, 8), Coord::new(2, 3));
    /// assert_eq!(Coord::from_action(20, 8), Coord::new(2, 4));
    /// ```
    #[must_use]
    pub const fn from_action(action: usize, size: usize) -> Self {
        Self {
            row: action / size,
            col: action % size,
        }
    }

    /// Encode as a flat action index.
    #[must_use]
    pub const fn to_action(self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Check that this coordinate lies on a `size × size` board.
    #[must_use]
    pub const fn in_bounds(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Step one cell in direction `(dr, dc)`.
    ///
    /// Returns `None` when the step leaves a `size × size` board.
    #[must_use]
    pub fn offset(self, (dr, dc): (isize, isize), size: usize) -> Option<Self> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        let next = Self { row, col };
        next.in_bounds(size).then_some(next)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// A recorded `step` call for history and replay.
///
/// Rejected actions are recorded too, so a log replays the exact sequence
/// of calls an episode received.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The flat action index passed to `step`.
    pub action: usize,

    /// The player to move when the action was issued.
    pub player: Player,

    /// Number of pieces flipped (0 when rejected).
    pub flipped: usize,

    /// Reward returned for this step.
    pub reward: f64,

    /// Whether the move was legal and applied.
    pub accepted: bool,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(action: usize, player: Player, flipped: usize, reward: f64, accepted: bool) -> Self {
        Self {
            action,
            player,
            flipped,
            reward,
            accepted,
        }
    }
}
