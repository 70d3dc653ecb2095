//! Action and observation space descriptors.
//!
//! Mirrors the gym convention: a `Discrete(size²)` action space and a
//! `size × size` box of `i8` bounded by `[-1, 1]`.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, GameRng};

/// Discrete action space of `size²` placements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSpace {
    size: usize,
}

impl ActionSpace {
    /// Action space for a `size × size` board.
    #[must_use]
    pub const fn new(size: usize) -> Self {
        Self { size }
    }

    /// Number of discrete actions.
    #[must_use]
    pub const fn n(&self) -> usize {
        self.size * self.size
    }

    /// Check that `action` is a valid index.
    #[must_use]
    pub const fn contains(&self, action: usize) -> bool {
        action < self.n()
    }

    /// Decode an action into a coordinate (row-major).
    #[must_use]
    pub const fn decode(&self, action: usize) -> Coord {
        Coord::from_action(action, self.size)
    }

    /// Encode a coordinate as an action.
    #[must_use]
    pub const fn encode(&self, coord: Coord) -> usize {
        coord.to_action(self.size)
    }

    /// Sample an action uniformly, legal or not.
    pub fn sample(&self, rng: &mut GameRng) -> usize {
        rng.gen_range_usize(0..self.n())
    }
}

/// Observation space: a `size × size` grid of values in `[-1, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationSpace {
    size: usize,
}

impl ObservationSpace {
    pub const LOW: i8 = -1;
    pub const HIGH: i8 = 1;

    /// Observation space for a `size × size` board.
    #[must_use]
    pub const fn new(size: usize) -> Self {
        Self { size }
    }

    /// Grid shape as `[rows, cols]`.
    #[must_use]
    pub const fn shape(&self) -> [usize; 2] {
        [self.size, self.size]
    }

    #[must_use]
    pub const fn low(&self) -> i8 {
        Self::LOW
    }

    #[must_use]
    pub const fn high(&self) -> i8 {
        Self::HIGH
    }

    /// Check that a flat row-major grid fits this space.
    #[must_use]
    pub fn contains(&self, values: &[i8]) -> bool {
        values.len() == self.size * self.size
            && values.iter().all(|v| (Self::LOW..=Self::HIGH).contains(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_space() {
        let space = ActionSpace::new(8);

        assert_eq!(space.n(), 64);
        assert!(space.contains(0));
        assert!(space.contains(63));
        assert!(!space.contains(64));
        assert_eq!(space.decode(20), Coord::new(2, 4));
        assert_eq!(space.encode(Coord::new(2, 4)), 20);
    }

    #[test]
    fn test_action_space_sample_in_range() {
        let space = ActionSpace::new(6);
        let mut rng = GameRng::new(7);

        for _ in 0..200 {
            assert!(space.contains(space.sample(&mut rng)));
        }
    }

    #[test]
    fn test_observation_space() {
        let space = ObservationSpace::new(4);

        assert_eq!(space.shape(), [4, 4]);
        assert_eq!(space.low(), -1);
        assert_eq!(space.high(), 1);
        assert!(space.contains(&[0; 16]));
        assert!(!space.contains(&[0; 15]));

        let mut values = [0i8; 16];
        values[5] = 2;
        assert!(!space.contains(&values));
    }
}
