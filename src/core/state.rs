//! Board state: the cell grid, whose turn it is, and the terminal flag.
//!
//! ## Board
//!
//! A `Board` is a plain value. Cloning it gives an independent position,
//! so concurrent episodes never share state. Only the rules engine mutates
//! cells, the player to move, or the terminal flag; the mutators are
//! crate-private.
//!
//! Cells are stored row-major, matching the flat action encoding.

use serde::{Deserialize, Serialize};

use super::action::Coord;
use super::config::{validate_board_size, DEFAULT_BOARD_SIZE};
use super::error::{Result, ReversiError};
use super::player::{Cell, Player};

/// A Reversi position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    current_player: Player,
    terminal: bool,
}

impl Board {
    /// Create a board in the opening position.
    ///
    /// The four centre cells form the opening cross with Player A on the
    /// positive diagonal. Player A moves first.
    pub fn new(size: usize) -> Result<Self> {
        validate_board_size(size)?;
        Ok(Self::opening(size))
    }

    /// Create the standard 8×8 opening position.
    #[must_use]
    pub fn standard() -> Self {
        Self::opening(DEFAULT_BOARD_SIZE)
    }

    /// Seed the opening cross. `size` must already be validated.
    fn opening(size: usize) -> Self {
        let mut board = Self {
            size,
            cells: vec![Cell::Empty; size * size],
            current_player: Player::A,
            terminal: false,
        };

        let c = size / 2;
        board.set_cell(Coord::new(c - 1, c - 1), Cell::A);
        board.set_cell(Coord::new(c - 1, c), Cell::B);
        board.set_cell(Coord::new(c, c - 1), Cell::B);
        board.set_cell(Coord::new(c, c), Cell::A);

        board
    }

    /// Build an arbitrary position from a row-major signed grid.
    ///
    /// `values` holds `+1` (A), `-1` (B) or `0` (empty). The turn is settled
    /// the same way as after a move: if `to_move` has no legal move the turn
    /// passes to the opponent, and if neither side can move the board is
    /// terminal (with `to_move` kept as the current player).
    ///
    /// ```
    /// use reversi_env::core::{Board, Player};
    ///
    /// let values = [
    ///     0, 0, 0, 0,
    ///     0, 1, -1, 0,
    ///     0, -1, 1, 0,
    ///     0, 0, 0, 0,
    /// ];
    /// let board = Board::from_signed(4, &values, Player::A).unwrap();
    /// assert_eq!(board, reversi_env::core::Board::new(4).unwrap());
    /// ```
    pub fn from_signed(size: usize, values: &[i8], to_move: Player) -> Result<Self> {
        validate_board_size(size)?;

        let expected = size * size;
        if values.len() != expected {
            return Err(ReversiError::GridMismatch {
                expected,
                actual: values.len(),
            });
        }

        let cells = values
            .iter()
            .map(|&v| Cell::from_value(v).ok_or(ReversiError::InvalidCellValue(v)))
            .collect::<Result<Vec<_>>>()?;

        let mut board = Self {
            size,
            cells,
            current_player: to_move,
            terminal: false,
        };

        crate::rules::settle_turn(&mut board, to_move.opponent());
        if board.terminal {
            board.current_player = to_move;
        }

        Ok(board)
    }

    /// Board side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the contents of a cell, or `None` if off the board.
    #[must_use]
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        coord.in_bounds(self.size).then(|| self.cells[self.index(coord)])
    }

    /// All cells, row-major.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The player to move.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Check if neither player can move.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Number of pieces owned by `player`.
    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|c| c.is_owned_by(player)).count()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Sum of all signed cell values (A = +1, B = -1).
    #[must_use]
    pub fn signed_sum(&self) -> i32 {
        self.cells.iter().map(|c| i32::from(c.value())).sum()
    }

    /// Row-major signed encoding of the grid.
    #[must_use]
    pub fn to_signed(&self) -> Vec<i8> {
        self.cells.iter().map(|c| c.value()).collect()
    }

    /// Iterate over every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let size = self.size;
        (0..size * size).map(move |i| Coord::from_action(i, size))
    }

    // === Mutation (rules engine only) ===

    pub(crate) fn set_cell(&mut self, coord: Coord, cell: Cell) {
        let index = self.index(coord);
        self.cells[index] = cell;
    }

    pub(crate) fn set_current_player(&mut self, player: Player) {
        self.current_player = player;
    }

    pub(crate) fn set_terminal(&mut self) {
        self.terminal = true;
    }

    fn index(&self, coord: Coord) -> usize {
        coord.to_action(self.size)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "  ")?;
        for col in 0..self.size {
            write!(f, "{}", (b'a' + col as u8) as char)?;
        }
        writeln!(f)?;

        for (row, cells) in self.cells.chunks(self.size).enumerate() {
            write!(f, "{:>2}", row)?;
            for cell in cells {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }

        if self.terminal {
            write!(f, "game over")
        } else {
            write!(f, "{} to move", self.current_player)
        }
    }
}
