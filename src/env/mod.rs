//! Gym-style environment over the rules engine.
//!
//! - `episode`: `ReversiEnv` with `reset` / `step`
//! - `space`: action and observation space descriptors
//! - `observation`: the signed grid observation and tensor encoders
//!
//! ## Usage
//!
//! ```
//! use reversi_env::env::ReversiEnv;
//!
//! let mut env = ReversiEnv::default();
//! let (obs, _info) = env.reset(Some(42));
//! assert_eq!(obs.get(3, 3), Some(1));
//!
//! let result = env.step(20);
//! assert_eq!(result.reward, 1.0);
//! assert!(!result.terminated);
//! ```

pub mod episode;
pub mod observation;
pub mod space;

pub use episode::{ResetInfo, ReversiEnv, StepInfo, StepResult, DEFAULT_SEED, INVALID_MOVE_MESSAGE};
pub use observation::{EncodedState, Observation, PlanesEncoder, SignedGridEncoder, StateEncoder};
pub use space::{ActionSpace, ObservationSpace};
