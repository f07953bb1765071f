//! Read-only detection of remaining legal moves
//!
//! The probe only ever borrows the cells immutably. A move exists in a
//! direction as soon as one tile could take a single step into a ghost or
//! merge with its neighbour, so each scan stops at the first such tile.

use crate::algorithm::resolution::grid_size;
use crate::board::direction::{Direction, traversal_order};
use crate::board::tile::Tile;
use ndarray::Array2;

/// Whether resolving a turn in `direction` would change any cell
pub fn has_move(cells: &Array2<Tile>, direction: Direction) -> bool {
    let size = grid_size(cells);

    traversal_order(size, direction).into_iter().any(|index| {
        let Some(tile) = cells.get(index.as_array_index()) else {
            return false;
        };
        if tile.is_ghost() {
            return false;
        }

        index
            .step(direction, size)
            .and_then(|next| cells.get(next.as_array_index()))
            .is_some_and(|neighbour| neighbour.is_ghost() || tile.is_mergeable(neighbour))
    })
}

/// Directions in which a move is currently possible
pub fn available_directions(cells: &Array2<Tile>) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&direction| has_move(cells, direction))
        .collect()
}

/// Whether any direction still yields a move
pub fn is_move_possible(cells: &Array2<Tile>) -> bool {
    Direction::ALL
        .into_iter()
        .any(|direction| has_move(cells, direction))
}
