//! Legality and flip computation: the 8-ray scan.
//!
//! From the target cell, walk outward along each compass direction. A ray
//! captures when the adjacent cell holds an opponent piece and the walk
//! meets zero or more further opponent pieces followed by one of the
//! mover's own pieces, all before leaving the board. A ray that leaves the
//! board or hits an empty cell first captures nothing.

use smallvec::SmallVec;

use crate::core::{Board, Cell, Coord, InvalidMoveReason, Player};

/// The eight compass directions as `(row, col)` unit steps.
///
/// Order is fixed: flips are reported ray by ray in this order.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Cells captured by one move.
///
/// Most moves flip only a few pieces, so this stays on the stack.
pub type FlipList = SmallVec<[Coord; 16]>;

/// Opponent run captured along a single ray, nearest cell first.
///
/// Returns an empty list when the ray captures nothing.
#[must_use]
pub fn ray_captures(board: &Board, origin: Coord, direction: (isize, isize), player: Player) -> FlipList {
    let size = board.size();
    let opponent = player.opponent().cell();
    let mut run = FlipList::new();
    let mut cursor = origin;

    loop {
        let Some(next) = cursor.offset(direction, size) else {
            return FlipList::new();
        };
        match board.cell(next) {
            Some(cell) if cell == opponent => run.push(next),
            Some(cell) if cell.is_owned_by(player) => return run,
            _ => return FlipList::new(),
        }
        cursor = next;
    }
}

/// Check whether `player` could legally place at `coord`, and why not.
///
/// On success returns every opponent cell the placement would flip
/// (never empty).
pub fn compute_flips(board: &Board, coord: Coord, player: Player) -> Result<FlipList, InvalidMoveReason> {
    match board.cell(coord) {
        None => return Err(InvalidMoveReason::OutOfBounds),
        Some(Cell::Empty) => {}
        Some(_) => return Err(InvalidMoveReason::Occupied),
    }

    let mut flips = FlipList::new();
    for direction in DIRECTIONS {
        flips.extend(ray_captures(board, coord, direction, player));
    }

    if flips.is_empty() {
        Err(InvalidMoveReason::NoCapture)
    } else {
        Ok(flips)
    }
}

/// Check whether `player` could legally place at `coord`.
///
/// Stops at the first capturing ray.
#[must_use]
pub fn is_legal_for(board: &Board, coord: Coord, player: Player) -> bool {
    if board.cell(coord) != Some(Cell::Empty) {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&direction| !ray_captures(board, coord, direction, player).is_empty())
}

/// Check whether the player to move could legally place at `coord`.
#[must_use]
pub fn is_legal(board: &Board, coord: Coord) -> bool {
    is_legal_for(board, coord, board.current_player())
}
