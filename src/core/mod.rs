//! Core engine types: players, coordinates, board state, configuration, RNG, errors.
//!
//! These are plain values with no behaviour beyond queries; the rules live
//! in `crate::rules`.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{ActionRecord, Coord};
pub use config::{EnvConfig, DEFAULT_BOARD_SIZE, DEFAULT_WIN_BONUS, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use error::{InvalidMoveReason, Result, ReversiError};
pub use player::{Cell, Player};
pub use rng::{GameRng, GameRngState};
pub use state::Board;
