//! Action logs and deterministic replay.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{ActionRecord, EnvConfig, Result, ReversiError};
use crate::env::ReversiEnv;

/// Recorded episode: config, seed and every `step` call in order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionLog {
    pub board_size: usize,
    pub win_bonus: f64,
    pub seed: Option<u64>,
    pub records: Vec<ActionRecord>,
}

impl ActionLog {
    /// Capture the episode played so far by `env`.
    #[must_use]
    pub fn from_env(env: &ReversiEnv) -> Self {
        Self {
            board_size: env.config().board_size,
            win_bonus: env.config().win_bonus,
            seed: env.seed(),
            records: env.history().iter().cloned().collect(),
        }
    }

    /// The environment config this log was recorded with.
    #[must_use]
    pub fn config(&self) -> EnvConfig {
        EnvConfig::default()
            .with_board_size(self.board_size)
            .with_win_bonus(self.win_bonus)
    }

    /// Flat actions in the order they were issued.
    pub fn actions(&self) -> impl Iterator<Item = usize> + '_ {
        self.records.iter().map(|r| r.action)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// Rebuild an environment by re-issuing every logged action.
///
/// Fails with [`ReversiError::ReplayDiverged`] if a step is accepted or
/// rejected differently, or flips a different number of pieces, than
/// the log recorded.
pub fn replay(log: &ActionLog) -> Result<ReversiEnv> {
    let mut env = ReversiEnv::new(log.config())?;
    env.reset(log.seed);

    for (index, record) in log.records.iter().enumerate() {
        let result = env.step(record.action);
        let accepted = !result.info.is_error();
        if accepted != record.accepted || result.info.flipped != record.flipped {
            debug!(index, action = record.action, "replay diverged");
            return Err(ReversiError::ReplayDiverged { index });
        }
    }

    Ok(env)
}
