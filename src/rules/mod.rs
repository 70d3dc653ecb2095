//! Reversi rules: legality, flipping, turn advancement and scoring.
//!
//! Everything here is a pure function of a `Board`:
//! - `flips`: the 8-ray capture scan
//! - `engine`: move application, pass/terminal state machine,
//!   legal-move enumeration, winner resolution
//!
//! Only this module mutates a board.

pub mod engine;
pub mod flips;

pub use engine::{
    apply_move, has_legal_move, legal_action_mask, legal_moves, legal_moves_for, play, score,
    winner, GameResult, MoveOutcome, TurnTransition,
};
pub use flips::{compute_flips, is_legal, is_legal_for, ray_captures, FlipList, DIRECTIONS};

pub(crate) use engine::settle_turn;
