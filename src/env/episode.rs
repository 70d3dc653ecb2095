//! The episode controller: gym-style `reset` / `step` over one board.
//!
//! `ReversiEnv` owns its board exclusively. Independent episodes are
//! independent values; cloning an env is cheap because the history is a
//! persistent vector.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::observation::{EncodedState, Observation, StateEncoder};
use super::space::{ActionSpace, ObservationSpace};
use crate::core::{
    ActionRecord, Board, Coord, EnvConfig, GameRng, InvalidMoveReason, Player, Result, ReversiError,
};
use crate::replay::EnvSnapshot;
use crate::rules::{self, GameResult, MoveOutcome, TurnTransition};

/// `info.error` value for a rejected action.
pub const INVALID_MOVE_MESSAGE: &str = "Invalid move";

/// Seed used until `reset` is given one.
pub const DEFAULT_SEED: u64 = 0;

/// Payload returned by `reset`. Always empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetInfo;

/// Payload returned by `step`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepInfo {
    /// `Some("Invalid move")` when the action was rejected.
    pub error: Option<String>,
    /// Why the action was rejected.
    pub rejection: Option<InvalidMoveReason>,
    /// Pieces flipped by this step.
    pub flipped: usize,
    /// Who moved, for accepted actions.
    pub mover: Option<Player>,
    /// How the turn advanced, for accepted actions.
    pub transition: Option<TurnTransition>,
    /// Final result, on the terminal step.
    pub winner: Option<GameResult>,
}

impl StepInfo {
    fn rejected(reason: InvalidMoveReason) -> Self {
        Self {
            error: Some(INVALID_MOVE_MESSAGE.to_string()),
            rejection: Some(reason),
            ..Self::default()
        }
    }

    /// Check if the step was rejected.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Result of `step`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
    /// Board after the step.
    pub observation: Observation,
    /// Reward from Player A's perspective.
    pub reward: f64,
    /// Whether the episode is over.
    pub terminated: bool,
    /// Always false; time limits belong to the caller.
    pub truncated: bool,
    pub info: StepInfo,
}

/// Reversi environment.
#[derive(Clone, Debug)]
pub struct ReversiEnv {
    config: EnvConfig,
    opening: Board,
    board: Board,
    rng: GameRng,
    seed: Option<u64>,
    history: Vector<ActionRecord>,
}

impl ReversiEnv {
    /// Create an environment in the opening position.
    pub fn new(config: EnvConfig) -> Result<Self> {
        config.validate()?;
        let opening = Board::new(config.board_size)?;

        Ok(Self {
            config,
            board: opening.clone(),
            opening,
            rng: GameRng::new(DEFAULT_SEED),
            seed: None,
            history: Vector::new(),
        })
    }

    /// Start a new episode.
    ///
    /// A `seed` reseeds the action sampler; `None` keeps the current stream.
    #[instrument(level = "debug", skip(self), fields(size = self.config.board_size))]
    pub fn reset(&mut self, seed: Option<u64>) -> (Observation, ResetInfo) {
        if let Some(seed) = seed {
            self.rng = GameRng::new(seed);
            self.seed = Some(seed);
        }

        self.board = self.opening.clone();
        self.history.clear();

        (self.observation(), ResetInfo)
    }

    /// Play the flat action `action` for the player to move.
    ///
    /// Rejected actions return zero reward, an unchanged board and
    /// `info.error = Some("Invalid move")`.
    #[instrument(level = "debug", skip(self), fields(player = %self.board.current_player()))]
    pub fn step(&mut self, action: usize) -> StepResult {
        let player = self.board.current_player();
        let coord = Coord::from_action(action, self.config.board_size);

        let (reward, info) = match rules::play(&mut self.board, coord) {
            Ok(outcome) => self.accepted(&outcome),
            Err(reason) => {
                debug!(action, %reason, "invalid action");
                (0.0, StepInfo::rejected(reason))
            }
        };

        self.history.push_back(ActionRecord::new(
            action,
            player,
            info.flipped,
            reward,
            !info.is_error(),
        ));

        StepResult {
            observation: self.observation(),
            reward,
            terminated: self.board.is_terminal(),
            truncated: false,
            info,
        }
    }

    fn accepted(&self, outcome: &MoveOutcome) -> (f64, StepInfo) {
        let flipped = outcome.flipped_count();
        let mut reward = f64::from(outcome.mover.sign()) * flipped as f64;
        let mut result = None;

        if outcome.is_terminal() {
            result = rules::winner(&self.board);
            match result {
                Some(GameResult::Winner(Player::A)) => reward += self.config.win_bonus,
                Some(GameResult::Winner(Player::B)) => reward -= self.config.win_bonus,
                _ => {}
            }
            let (a, b) = rules::score(&self.board);
            info!(?result, a, b, "episode finished");
        }

        let info = StepInfo {
            flipped,
            mover: Some(outcome.mover),
            transition: Some(outcome.transition),
            winner: result,
            ..StepInfo::default()
        };
        (reward, info)
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn observation(&self) -> Observation {
        Observation::from(&self.board)
    }

    /// Encode the current board with `encoder`.
    pub fn encode(&self, encoder: &dyn StateEncoder) -> EncodedState {
        encoder.encode(&self.board)
    }

    #[must_use]
    pub fn current_player(&self) -> Player {
        self.board.current_player()
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.board.is_terminal()
    }

    /// Final result, or `None` while the episode is running.
    #[must_use]
    pub fn winner(&self) -> Option<GameResult> {
        rules::winner(&self.board)
    }

    #[must_use]
    pub fn action_space(&self) -> ActionSpace {
        ActionSpace::new(self.config.board_size)
    }

    #[must_use]
    pub fn observation_space(&self) -> ObservationSpace {
        ObservationSpace::new(self.config.board_size)
    }

    /// Legal coordinates for the player to move, row-major.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Coord> {
        rules::legal_moves(&self.board)
    }

    /// Legal flat actions for the player to move, ascending.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<usize> {
        let space = self.action_space();
        self.legal_moves().into_iter().map(|c| space.encode(c)).collect()
    }

    #[must_use]
    pub fn legal_action_mask(&self) -> Vec<bool> {
        rules::legal_action_mask(&self.board)
    }

    /// Sample any action uniformly.
    pub fn sample_action(&mut self) -> usize {
        self.action_space().sample(&mut self.rng)
    }

    /// Sample a legal action uniformly, or `None` if there is none.
    pub fn sample_legal_action(&mut self) -> Option<usize> {
        let legal = self.legal_actions();
        self.rng.choose(&legal).copied()
    }

    /// Every `step` call since the last reset.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// The seed most recently passed to `reset`.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    // === Snapshots ===

    /// Capture the full environment state.
    #[must_use]
    pub fn snapshot(&self) -> EnvSnapshot {
        EnvSnapshot {
            config: self.config.clone(),
            board: self.board.clone(),
            rng: self.rng.state(),
            seed: self.seed,
            history: self.history.iter().cloned().collect(),
        }
    }

    /// Rebuild an environment from a snapshot.
    ///
    /// The board is rebuilt from its signed grid, so a malformed grid fails
    /// with [`ReversiError::GridMismatch`] and the turn and terminal flag
    /// are settled again.
    pub fn restore(snapshot: &EnvSnapshot) -> Result<Self> {
        snapshot.config.validate()?;
        let size = snapshot.config.board_size;
        if snapshot.board.size() != size {
            return Err(ReversiError::InvalidBoardSize(snapshot.board.size()));
        }
        let board = Board::from_signed(
            size,
            &snapshot.board.to_signed(),
            snapshot.board.current_player(),
        )?;

        Ok(Self {
            config: snapshot.config.clone(),
            opening: Board::new(size)?,
            board,
            rng: GameRng::from_state(&snapshot.rng),
            seed: snapshot.seed,
            history: snapshot.history.iter().cloned().collect(),
        })
    }
}

impl Default for ReversiEnv {
    fn default() -> Self {
        Self {
            config: EnvConfig::default(),
            opening: Board::standard(),
            board: Board::standard(),
            rng: GameRng::new(DEFAULT_SEED),
            seed: None,
            history: Vector::new(),
        }
    }
}
