//! Full environment snapshots.

use serde::{Deserialize, Serialize};

use crate::core::{ActionRecord, Board, EnvConfig, GameRngState, Result};

/// Serializable state of a `ReversiEnv`.
///
/// Create with `ReversiEnv::snapshot`, rebuild with `ReversiEnv::restore`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnvSnapshot {
    pub config: EnvConfig,
    pub board: Board,
    pub rng: GameRngState,
    pub seed: Option<u64>,
    pub history: Vec<ActionRecord>,
}

impl EnvSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
