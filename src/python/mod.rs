//! Python bindings for the Reversi environment.
//!
//! Exposes a gymnasium-shaped `ReversiEnv` class whose observations are
//! numpy `int8` arrays.
//!
//! # Quick Start
//!
//! ```python
//! import reversi_env
//!
//! env = reversi_env.ReversiEnv(board_size=8)
//! obs, info = env.reset(seed=42)
//!
//! obs, reward, terminated, truncated, info = env.step(20)
//! assert reward == 1.0
//!
//! # Legal moves for the player to move, as (row, col) pairs
//! moves = env.get_valid_moves()
//! ```

use pyo3::prelude::*;

mod py_env;

pub use py_env::*;

/// reversi_env: a Reversi/Othello environment for reinforcement learning.
#[pymodule]
fn reversi_env(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyReversiEnv>()?;
    Ok(())
}
