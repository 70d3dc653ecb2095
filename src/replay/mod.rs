//! Episode logs and snapshots.
//!
//! - **ActionLog**: the ordered `step` calls of an episode plus the config
//!   and seed needed to reproduce it. Replaying a log rebuilds the same
//!   board, since the rules are deterministic.
//! - **EnvSnapshot**: the full environment state (board, history, RNG),
//!   for pausing and resuming an episode exactly.
//!
//! Both serialize with serde; `to_bytes` / `from_bytes` use bincode.

pub mod log;
pub mod snapshot;

pub use log::{replay, ActionLog};
pub use snapshot::EnvSnapshot;
