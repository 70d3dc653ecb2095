//! Environment bindings for Python.

use numpy::{PyArray1, PyArray2, PyArray3, PyArrayMethods};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::core::{Coord, EnvConfig, ReversiError};
use crate::env::{Observation, PlanesEncoder, ReversiEnv};
use crate::rules::{self, GameResult};

fn value_error(err: impl std::fmt::Display) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", err))
}

impl From<ReversiError> for PyErr {
    fn from(err: ReversiError) -> Self {
        value_error(err)
    }
}

fn observation_array<'py>(py: Python<'py>, obs: Observation) -> PyResult<Bound<'py, PyArray2<i8>>> {
    let size = obs.size();
    PyArray1::from_vec_bound(py, obs.into_vec())
        .reshape([size, size])
        .map_err(value_error)
}

/// Python wrapper for ReversiEnv.
///
/// Player A is `1`, Player B is `-1`, empty cells are `0`.
#[pyclass(name = "ReversiEnv")]
pub struct PyReversiEnv {
    inner: ReversiEnv,
}

#[pymethods]
impl PyReversiEnv {
    /// Create a new environment.
    ///
    /// # Arguments
    /// - board_size: Even board side length (4-26)
    /// - win_bonus: Reward added for an A win, subtracted for a B win
    #[new]
    #[pyo3(signature = (board_size = 8, win_bonus = 100.0))]
    fn new(board_size: usize, win_bonus: f64) -> PyResult<Self> {
        let config = EnvConfig::default()
            .with_board_size(board_size)
            .with_win_bonus(win_bonus);
        Ok(Self {
            inner: ReversiEnv::new(config)?,
        })
    }

    /// Reset to the opening position.
    ///
    /// Returns (observation, info).
    #[pyo3(signature = (seed = None))]
    fn reset<'py>(
        &mut self,
        py: Python<'py>,
        seed: Option<u64>,
    ) -> PyResult<(Bound<'py, PyArray2<i8>>, Bound<'py, PyDict>)> {
        let (obs, _) = self.inner.reset(seed);
        Ok((observation_array(py, obs)?, PyDict::new_bound(py)))
    }

    /// Play a flat action.
    ///
    /// Returns (observation, reward, terminated, truncated, info).
    /// A rejected action sets info["error"] = "Invalid move".
    fn step<'py>(
        &mut self,
        py: Python<'py>,
        action: usize,
    ) -> PyResult<(Bound<'py, PyArray2<i8>>, f64, bool, bool, Bound<'py, PyDict>)> {
        let result = self.inner.step(action);

        let info = PyDict::new_bound(py);
        if let Some(error) = &result.info.error {
            info.set_item("error", error)?;
        }

        Ok((
            observation_array(py, result.observation)?,
            result.reward,
            result.terminated,
            result.truncated,
            info,
        ))
    }

    /// Legal moves for the player to move, as (row, col) pairs.
    fn get_valid_moves(&self) -> Vec<(usize, usize)> {
        self.inner
            .legal_moves()
            .into_iter()
            .map(|c| (c.row, c.col))
            .collect()
    }

    /// Check whether the player to move may place at (row, col).
    fn is_valid_move(&self, row: usize, col: usize) -> bool {
        rules::is_legal(self.inner.board(), Coord::new(row, col))
    }

    /// Boolean mask over the action space.
    fn legal_action_mask<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<bool>> {
        PyArray1::from_vec_bound(py, self.inner.legal_action_mask())
    }

    /// Winner as 1 (A), -1 (B) or 0 (draw); None while the game runs.
    fn get_winner(&self) -> Option<i8> {
        self.inner.winner().map(|result| match result {
            GameResult::Winner(p) => p.sign(),
            GameResult::Draw => 0,
        })
    }

    /// Sample a uniformly random legal action, or None.
    fn sample_legal_action(&mut self) -> Option<usize> {
        self.inner.sample_legal_action()
    }

    /// Current board as an int8 array.
    fn board<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<i8>>> {
        observation_array(py, self.inner.observation())
    }

    /// Mover-relative planes [own, opponent, legal] as float32, shape (3, n, n).
    fn encode_planes<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray3<f32>>> {
        let size = self.inner.config().board_size;
        let encoded = self.inner.encode(&PlanesEncoder);
        PyArray1::from_vec_bound(py, encoded.tensor)
            .reshape([3, size, size])
            .map_err(value_error)
    }

    /// Player to move: 1 (A) or -1 (B).
    #[getter]
    fn current_player(&self) -> i8 {
        self.inner.current_player().sign()
    }

    #[getter]
    fn done(&self) -> bool {
        self.inner.is_terminal()
    }

    #[getter]
    fn board_size(&self) -> usize {
        self.inner.config().board_size
    }

    /// Number of discrete actions.
    #[getter]
    fn action_space_n(&self) -> usize {
        self.inner.action_space().n()
    }

    /// Copy the environment for simulation.
    fn copy(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }

    fn __repr__(&self) -> String {
        let status = if self.inner.is_terminal() {
            "terminal"
        } else {
            "ongoing"
        };
        let (a, b) = rules::score(self.inner.board());
        format!(
            "ReversiEnv(size={}, to_move={}, score={}-{}, status={})",
            self.inner.config().board_size,
            self.inner.current_player().sign(),
            a,
            b,
            status
        )
    }
}
