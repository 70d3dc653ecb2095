//! # reversi-env
//!
//! A deterministic Reversi/Othello rule engine exposed as a
//! reinforcement-learning environment.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: Legality, flipping, pass handling and scoring are
//!    functions of a `Board`. The environment layers episodes, rewards and
//!    sampling on top.
//!
//! 2. **Never Panic on Agent Input**: Out-of-range, occupied or
//!    non-capturing actions are ordinary `step` outcomes with
//!    `info.error = "Invalid move"` and zero reward.
//!
//! 3. **Deterministic**: Given a seed and an action sequence, every
//!    episode replays identically.
//!
//! ## Modules
//!
//! - `core`: Players, cells, coordinates, board state, config, RNG, errors
//! - `rules`: Capture scan, move application, pass/terminal state machine
//! - `env`: Gym-style `ReversiEnv`, spaces, observations and encoders
//! - `replay`: Action logs, deterministic replay, snapshots
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod env;
pub mod replay;
pub mod rules;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    ActionRecord, Board, Cell, Coord, EnvConfig, GameRng, GameRngState, InvalidMoveReason, Player,
    Result, ReversiError,
};

pub use crate::rules::{GameResult, MoveOutcome, TurnTransition};

pub use crate::env::{
    ActionSpace, EncodedState, Observation, ObservationSpace, PlanesEncoder, ResetInfo, ReversiEnv,
    SignedGridEncoder, StateEncoder, StepInfo, StepResult,
};

pub use crate::replay::{replay, ActionLog, EnvSnapshot};
