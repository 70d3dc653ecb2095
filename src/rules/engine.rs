//! Move application, turn advancement, enumeration and winner resolution.
//!
//! Turn advancement after a move is a small state machine:
//!
//! ```text
//! Normal ──opponent can move──────────────▶ Alternate
//!   │
//!   └─opponent stuck─▶ PassCheck ──mover can move──▶ Pass
//!                          │
//!                          └─mover stuck──▶ Terminal
//! ```
//!
//! A full board is detected the same way: nobody has a legal move.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::flips::{compute_flips, is_legal_for, FlipList};
use crate::core::{Board, Coord, InvalidMoveReason, Player, Result, ReversiError};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner by piece majority.
    Winner(Player),
    /// Equal piece counts.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

/// How the turn advanced after a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnTransition {
    /// The opponent is to move.
    Alternate,
    /// The opponent had no legal move; the mover plays again.
    Pass,
    /// Neither player can move. The game is over.
    Terminal,
}

/// Outcome of an applied move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Where the piece was placed.
    pub coord: Coord,
    /// Who placed it.
    pub mover: Player,
    /// Cells flipped to the mover's colour.
    pub flipped: FlipList,
    /// How the turn advanced.
    pub transition: TurnTransition,
}

impl MoveOutcome {
    #[must_use]
    pub fn flipped_count(&self) -> usize {
        self.flipped.len()
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.transition == TurnTransition::Terminal
    }
}

/// Apply a move for the player to move.
///
/// An illegal move returns [`ReversiError::InvalidMove`] and leaves the
/// board untouched.
pub fn apply_move(board: &mut Board, coord: Coord) -> Result<MoveOutcome> {
    play(board, coord).map_err(|reason| ReversiError::InvalidMove {
        row: coord.row,
        col: coord.col,
        reason,
    })
}

/// Like [`apply_move`], reporting only the rejection reason.
pub fn play(board: &mut Board, coord: Coord) -> std::result::Result<MoveOutcome, InvalidMoveReason> {
    let mover = board.current_player();
    let flipped = compute_flips(board, coord, mover).inspect_err(|reason| {
        debug!(%coord, %mover, %reason, "rejected move");
    })?;

    let piece = mover.cell();
    board.set_cell(coord, piece);
    for &captured in &flipped {
        board.set_cell(captured, piece);
    }
    trace!(%coord, %mover, flipped = flipped.len(), "applied move");

    let transition = settle_turn(board, mover);

    Ok(MoveOutcome {
        coord,
        mover,
        flipped,
        transition,
    })
}

/// Hand the turn on after `mover` has acted.
///
/// Runs the Normal → PassCheck → Terminal machine. On `Terminal` the
/// current player is left as `mover`.
pub(crate) fn settle_turn(board: &mut Board, mover: Player) -> TurnTransition {
    let opponent = mover.opponent();

    if has_legal_move(board, opponent) {
        board.set_current_player(opponent);
        return TurnTransition::Alternate;
    }

    board.set_current_player(mover);
    if has_legal_move(board, mover) {
        debug!(passed = %opponent, "forced pass");
        TurnTransition::Pass
    } else {
        board.set_terminal();
        TurnTransition::Terminal
    }
}

/// Check whether `player` has any legal move.
#[must_use]
pub fn has_legal_move(board: &Board, player: Player) -> bool {
    board.coords().any(|coord| is_legal_for(board, coord, player))
}

/// Every legal move for `player`, in ascending row-major order.
#[must_use]
pub fn legal_moves_for(board: &Board, player: Player) -> Vec<Coord> {
    board
        .coords()
        .filter(|&coord| is_legal_for(board, coord, player))
        .collect()
}

/// Every legal move for the player to move, in ascending row-major order.
#[must_use]
pub fn legal_moves(board: &Board) -> Vec<Coord> {
    legal_moves_for(board, board.current_player())
}

/// Legal-move mask indexed by flat action.
#[must_use]
pub fn legal_action_mask(board: &Board) -> Vec<bool> {
    let player = board.current_player();
    board
        .coords()
        .map(|coord| is_legal_for(board, coord, player))
        .collect()
}

/// Resolve the winner by piece majority.
///
/// Returns `None` while the game is still running.
#[must_use]
pub fn winner(board: &Board) -> Option<GameResult> {
    if !board.is_terminal() {
        return None;
    }

    let result = match board.signed_sum() {
        s if s > 0 => GameResult::Winner(Player::A),
        s if s < 0 => GameResult::Winner(Player::B),
        _ => GameResult::Draw,
    };
    Some(result)
}

/// Piece counts as `(player_a, player_b)`.
#[must_use]
pub fn score(board: &Board) -> (usize, usize) {
    (board.count(Player::A), board.count(Player::B))
}
