//! Observations and tensor encodings of a board.
//!
//! - `Observation`: the environment's native observation, a row-major
//!   `size × size` grid of `i8` in `{-1, 0, +1}` (A, empty, B as
//!   `+1`, `0`, `-1`).
//! - `StateEncoder`: converts a board into an `EncodedState` tensor for
//!   neural-network consumers. Two encoders are provided:
//!   `SignedGridEncoder` and `PlanesEncoder`.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Coord};
use crate::rules;

/// Signed grid observation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Observation {
    size: usize,
    cells: Vec<i8>,
}

impl Observation {
    /// Board side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Value at `(row, col)`, or `None` off the board.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<i8> {
        Coord::new(row, col)
            .in_bounds(self.size)
            .then(|| self.cells[row * self.size + col])
    }

    /// Row-major values.
    #[must_use]
    pub fn as_slice(&self) -> &[i8] {
        &self.cells
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[i8]> {
        self.cells.chunks(self.size)
    }

    /// Consume into row-major values.
    #[must_use]
    pub fn into_vec(self) -> Vec<i8> {
        self.cells
    }
}

impl From<&Board> for Observation {
    fn from(board: &Board) -> Self {
        Self {
            size: board.size(),
            cells: board.to_signed(),
        }
    }
}

/// Encoded board as a flat tensor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedState {
    /// Flattened tensor data (row-major order).
    pub tensor: Vec<f32>,

    /// Shape of the tensor (e.g., `[channels, height, width]`).
    pub shape: Vec<usize>,
}

impl EncodedState {
    /// Create a new encoded state.
    pub fn new(tensor: Vec<f32>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(
            tensor.len(),
            shape.iter().product::<usize>(),
            "Tensor length must match shape product"
        );
        Self { tensor, shape }
    }

    /// Get the total number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    /// Check if the tensor is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }
}

/// Encodes a board into a tensor.
pub trait StateEncoder: Send + Sync {
    /// Encode the board.
    fn encode(&self, board: &Board) -> EncodedState;

    /// Shape of encoded states for a `size × size` board.
    fn output_shape(&self, size: usize) -> Vec<usize>;
}

/// The signed grid as `f32`, shape `[size, size]`.
///
/// Values are from Player A's perspective regardless of who is to move.
#[derive(Clone, Copy, Debug, Default)]
pub struct SignedGridEncoder;

impl StateEncoder for SignedGridEncoder {
    fn encode(&self, board: &Board) -> EncodedState {
        let tensor = board.cells().iter().map(|c| f32::from(c.value())).collect();
        EncodedState::new(tensor, self.output_shape(board.size()))
    }

    fn output_shape(&self, size: usize) -> Vec<usize> {
        vec![size, size]
    }
}

/// Three binary planes from the mover's perspective, shape `[3, size, size]`:
///
/// 0. pieces of the player to move
/// 1. opponent pieces
/// 2. legal moves for the player to move
#[derive(Clone, Copy, Debug, Default)]
pub struct PlanesEncoder;

impl PlanesEncoder {
    const PLANES: usize = 3;
}

impl StateEncoder for PlanesEncoder {
    fn encode(&self, board: &Board) -> EncodedState {
        let area = board.size() * board.size();
        let mover = board.current_player();
        let mut tensor = vec![0.0f32; Self::PLANES * area];

        for (i, cell) in board.cells().iter().enumerate() {
            match cell.owner() {
                Some(p) if p == mover => tensor[i] = 1.0,
                Some(_) => tensor[area + i] = 1.0,
                None => {}
            }
        }

        if !board.is_terminal() {
            for (i, legal) in rules::legal_action_mask(board).into_iter().enumerate() {
                if legal {
                    tensor[2 * area + i] = 1.0;
                }
            }
        }

        EncodedState::new(tensor, self.output_shape(board.size()))
    }

    fn output_shape(&self, size: usize) -> Vec<usize> {
        vec![Self::PLANES, size, size]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Player, ReversiError};

    #[test]
    fn test_observation_from_board() {
        let board = Board::standard();
        let obs = Observation::from(&board);

        assert_eq!(obs.size(), 8);
        assert_eq!(obs.as_slice().len(), 64);
        assert_eq!(obs.get(3, 3), Some(1));
        assert_eq!(obs.get(3, 4), Some(-1));
        assert_eq!(obs.get(4, 3), Some(-1));
        assert_eq!(obs.get(4, 4), Some(1));
        assert_eq!(obs.get(0, 0), Some(0));
        assert_eq!(obs.get(8, 0), None);
        assert_eq!(obs.rows().count(), 8);
    }

    #[test]
    fn test_signed_grid_encoder() {
        let board = Board::standard();
        let encoded = SignedGridEncoder.encode(&board);

        assert_eq!(encoded.shape, vec![8, 8]);
        assert_eq!(encoded.len(), 64);
        assert_eq!(encoded.tensor[3 * 8 + 3], 1.0);
        assert_eq!(encoded.tensor[3 * 8 + 4], -1.0);
    }

    #[test]
    fn test_planes_encoder_opening() {
        let board = Board::standard();
        let encoded = PlanesEncoder.encode(&board);

        assert_eq!(encoded.shape, vec![3, 8, 8]);
        assert_eq!(encoded.len(), 192);

        let own: f32 = encoded.tensor[..64].iter().sum();
        let opp: f32 = encoded.tensor[64..128].iter().sum();
        let legal: f32 = encoded.tensor[128..].iter().sum();
        assert_eq!(own, 2.0);
        assert_eq!(opp, 2.0);
        assert_eq!(legal, 4.0);
        assert_eq!(encoded.tensor[128 + 20], 1.0);
    }

    #[test]
    fn test_planes_encoder_follows_mover() -> Result<(), ReversiError> {
        let board = Board::from_signed(4, &Board::new(4)?.to_signed(), Player::B)?;
        let encoded = PlanesEncoder.encode(&board);

        // B to move: plane 0 holds B's pieces at (1, 2) and (2, 1)
        assert_eq!(encoded.tensor[6], 1.0);
        assert_eq!(encoded.tensor[9], 1.0);
        assert_eq!(encoded.tensor[5], 0.0);
        assert_eq!(encoded.tensor[16 + 5], 1.0);
        Ok(())
    }
}
