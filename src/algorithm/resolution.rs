//! Per-turn slide and merge resolution
//!
//! Tiles are resolved one at a time in traversal order. Each tile steps
//! towards the direction edge while the next cell is a ghost; when it is
//! blocked by an equal, merge-eligible tile the two merge into the blocking
//! cell. Merged tiles are locked for the rest of the turn, so a row such as
//! `[2, 2, 2, 2]` moved left becomes `[4, 4, _, _]`.

use crate::board::direction::{Direction, TileIndex, traversal_order};
use crate::board::tile::Tile;
use log::trace;
use ndarray::Array2;

/// A merge performed while resolving a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Merge {
    /// Cell holding the doubled tile
    pub target: TileIndex,
    /// Value after doubling
    pub value: u32,
}

/// Outcome of resolving one turn
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnSummary {
    /// Single-cell steps taken by all tiles
    pub steps: usize,
    /// Merges in the order they happened
    pub merges: Vec<Merge>,
}

impl TurnSummary {
    /// Whether the turn changed any cell
    pub const fn changed(&self) -> bool {
        self.steps > 0 || !self.merges.is_empty()
    }

    /// Sum of the tile values produced by this turn's merges
    ///
    /// This is what a 2048 score counts. The grid's value sum is not changed
    /// by merges: the moving tile's value moves into the doubled target.
    pub fn merge_score(&self) -> u32 {
        self.merges.iter().map(|merge| merge.value).sum()
    }
}

/// Side length of a square cell array
pub fn grid_size(cells: &Array2<Tile>) -> usize {
    cells.nrows()
}

/// Move the tile at `from` one cell in `direction`
///
/// The tile is re-homed at the neighbouring cell and a ghost takes its
/// place. Returns the new index, or `None` when `from` is a ghost, sits on
/// the direction edge, or the destination is occupied.
pub fn move_tile(
    cells: &mut Array2<Tile>,
    from: TileIndex,
    direction: Direction,
) -> Option<TileIndex> {
    let to = from.step(direction, grid_size(cells))?;
    let tile = cells.get(from.as_array_index()).copied()?;
    if tile.is_ghost() {
        return None;
    }

    let destination = cells.get_mut(to.as_array_index())?;
    if !destination.is_ghost() {
        return None;
    }
    *destination = tile;

    if let Some(vacated) = cells.get_mut(from.as_array_index()) {
        *vacated = Tile::ghost();
    }
    Some(to)
}

/// Resolve a full turn in `direction`, then clear every tile's turn flags
pub fn resolve_turn(cells: &mut Array2<Tile>, direction: Direction) -> TurnSummary {
    let mut summary = TurnSummary::default();

    for index in traversal_order(grid_size(cells), direction) {
        resolve_tile(cells, index, direction, &mut summary);
    }

    for tile in cells.iter_mut() {
        tile.end_turn_reset();
    }

    summary
}

fn resolve_tile(
    cells: &mut Array2<Tile>,
    start: TileIndex,
    direction: Direction,
    summary: &mut TurnSummary,
) {
    let size = grid_size(cells);
    let Some(tile) = cells.get(start.as_array_index()).copied() else {
        return;
    };
    if tile.is_ghost() {
        return;
    }

    let mut current = start;
    let mut pending_merge = None;

    while let Some(next) = current.step(direction, size) {
        let Some(neighbour) = cells.get(next.as_array_index()).copied() else {
            break;
        };

        if !neighbour.is_ghost() {
            if tile.is_mergeable(&neighbour) {
                pending_merge = Some(next);
            }
            break;
        }

        match move_tile(cells, current, direction) {
            Some(moved) => {
                current = moved;
                summary.steps += 1;
            }
            None => break,
        }
    }

    if current != start {
        trace!("tile {start} slid {direction} to {current}");
    }

    if let Some(target) = pending_merge {
        merge_into(cells, current, target, summary);
    }
}

// The moving tile disappears and the stationary target holds the doubled value
fn merge_into(
    cells: &mut Array2<Tile>,
    moving: TileIndex,
    target: TileIndex,
    summary: &mut TurnSummary,
) {
    if let Some(vacated) = cells.get_mut(moving.as_array_index()) {
        *vacated = Tile::ghost();
    }

    if let Some(host) = cells.get_mut(target.as_array_index()) {
        host.apply_merge_doubling();
        if let Some(value) = host.value() {
            trace!("merged {moving} into {target}, value {value}");
            summary.merges.push(Merge { target, value });
        }
    }
}
