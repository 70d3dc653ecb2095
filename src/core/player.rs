//! Players and cell contents.
//!
//! ## Player
//!
//! The two sides of a Reversi game. `PlayerA` moves first and is encoded
//! as `+1`; `PlayerB` is encoded as `-1`.
//!
//! ## Cell
//!
//! A single board square: empty or holding one player's piece.
//! The signed encoding (`+1`, `-1`, `0`) is the observation format.

use serde::{Deserialize, Serialize};

/// One of the two players.
///
/// `PlayerA` always moves first after a reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First player, encoded as `+1`.
    A,
    /// Second player, encoded as `-1`.
    B,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::A, Player::B];

    /// Get the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Signed value of this player's pieces.
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Player::A => 1,
            Player::B => -1,
        }
    }

    /// Parse a signed value. Returns `None` for anything but `+1` / `-1`.
    #[must_use]
    pub const fn from_sign(value: i8) -> Option<Self> {
        match value {
            1 => Some(Player::A),
            -1 => Some(Player::B),
            _ => None,
        }
    }

    /// The cell value for a piece owned by this player.
    #[must_use]
    pub const fn cell(self) -> Cell {
        match self {
            Player::A => Cell::A,
            Player::B => Cell::B,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::A => write!(f, "Player A"),
            Player::B => write!(f, "Player B"),
        }
    }
}

/// Contents of a board square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    A,
    B,
}

impl Cell {
    /// Signed encoding: `+1` for A, `-1` for B, `0` for empty.
    #[must_use]
    pub const fn value(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::A => 1,
            Cell::B => -1,
        }
    }

    /// Parse a signed value. Returns `None` outside `{-1, 0, 1}`.
    #[must_use]
    pub const fn from_value(value: i8) -> Option<Self> {
        match value {
            0 => Some(Cell::Empty),
            1 => Some(Cell::A),
            -1 => Some(Cell::B),
            _ => None,
        }
    }

    /// The owner of the piece in this cell, if any.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::A => Some(Player::A),
            Cell::B => Some(Player::B),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Check if this cell holds `player`'s piece.
    #[must_use]
    pub fn is_owned_by(self, player: Player) -> bool {
        self == player.cell()
    }

    /// Single-character symbol used by the board's `Display`.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::A => 'X',
            Cell::B => 'O',
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        player.cell()
    }
}
