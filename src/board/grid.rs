//! Grid state and the engine-facing turn interface
//!
//! A `Grid` owns an N x N array of tiles, the direction selected for the
//! pending turn and the random source used for spawning. A turn is driven by
//! the engine in three calls: `select_direction`, `resolve_turn` and
//! `spawn_tile`, after which `is_game_over` tells whether the player can
//! still act. `play_turn` bundles the three calls.

use crate::algorithm::probe;
use crate::algorithm::resolution::{self, TurnSummary};
use crate::algorithm::spawn::RandomSpawner;
use crate::board::difficulty::Difficulty;
use crate::board::direction::{Direction, TileIndex};
use crate::board::tile::Tile;
use crate::io::configuration::INITIAL_TILE_COUNT;
use crate::io::error::{Result, invalid_parameter};
use log::{debug, warn};
use ndarray::Array2;
use std::fmt;

/// Read-only snapshot of one cell for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    /// The cell holds no tile
    pub is_empty: bool,
    /// Tile value, `None` when empty
    pub value: Option<u32>,
    /// The tile was spawned since the last resolved turn
    pub is_fresh: bool,
}

impl From<&Tile> for CellView {
    fn from(tile: &Tile) -> Self {
        Self {
            is_empty: tile.is_ghost(),
            value: tile.value(),
            is_fresh: tile.is_fresh(),
        }
    }
}

/// Square playing grid
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Array2<Tile>,
    direction: Option<Direction>,
    spawner: RandomSpawner,
}

impl Grid {
    /// Create a grid sized for `difficulty` holding its two starting tiles
    pub fn new(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_size(difficulty.grid_size(), seed)
    }

    /// Create a `size` x `size` grid holding its two starting tiles
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero
    pub fn with_size(size: usize, seed: u64) -> Self {
        let mut grid = Self::empty(size, seed);
        let starting_tiles = INITIAL_TILE_COUNT.min(size * size);
        while grid.occupied_count() < starting_tiles {
            grid.spawn_tile();
        }
        grid
    }

    /// Create a `size` x `size` grid of ghosts
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero
    pub fn empty(size: usize, seed: u64) -> Self {
        assert!(size > 0, "grid size must be at least 1");
        Self {
            cells: Array2::default((size, size)),
            direction: None,
            spawner: RandomSpawner::new(seed),
        }
    }

    /// Build a grid from row-major values where 0 marks an empty cell
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, the rows do not form a square,
    /// or a value is neither 0 nor a power of two of at least 2
    pub fn from_rows(rows: &[Vec<u32>], seed: u64) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(invalid_parameter("rows", &0, &"grid needs at least one row"));
        }

        let mut grid = Self::empty(size, seed);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(invalid_parameter(
                    "rows",
                    &format!("row {y} has {} cells", row.len()),
                    &format!("every row must have {size} cells"),
                ));
            }

            for (x, &value) in row.iter().enumerate() {
                if value == 0 {
                    continue;
                }
                if value < 2 || !value.is_power_of_two() {
                    return Err(invalid_parameter(
                        "value",
                        &value,
                        &"tile values must be powers of two of at least 2",
                    ));
                }
                grid.set_tile(TileIndex::new(x, y), Tile::with_value(value));
            }
        }

        Ok(grid)
    }

    /// Side length N of the grid
    pub fn grid_dimension(&self) -> usize {
        self.cells.nrows()
    }

    /// Direction selected for the pending turn, `None` when idle
    pub const fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Set the direction the next `resolve_turn` slides in
    pub const fn select_direction(&mut self, direction: Direction) {
        self.direction = Some(direction);
    }

    /// Slide and merge tiles in the selected direction
    ///
    /// Clears every tile's turn flags and the selected direction afterwards.
    /// Does nothing when no direction is selected.
    pub fn resolve_turn(&mut self) -> TurnSummary {
        let Some(direction) = self.direction.take() else {
            return TurnSummary::default();
        };

        let summary = resolution::resolve_turn(&mut self.cells, direction);
        debug!(
            "resolved {direction}: {} steps, {} merges",
            summary.steps,
            summary.merges.len()
        );
        summary
    }

    /// Place a random 2 or 4 on a uniformly chosen empty cell
    ///
    /// Returns the index of the new tile, or `None` when the grid is full.
    pub fn spawn_tile(&mut self) -> Option<TileIndex> {
        if self.is_full() {
            warn!("no room left to spawn a tile");
            return None;
        }

        let size = self.grid_dimension();
        loop {
            let index = TileIndex::new(
                self.spawner.random_coordinate(size),
                self.spawner.random_coordinate(size),
            );
            if self.tile(index).is_some_and(Tile::is_ghost) {
                let tile = Tile::random(&mut self.spawner);
                self.set_tile(index, tile);
                debug!("spawned {} at {index}", tile.label());
                return Some(index);
            }
        }
    }

    /// Run a full turn: select `direction`, resolve it and spawn a tile
    ///
    /// A tile is spawned even when nothing moved.
    pub fn play_turn(&mut self, direction: Direction) -> TurnSummary {
        self.select_direction(direction);
        let summary = self.resolve_turn();
        self.spawn_tile();
        summary
    }

    /// Whether no direction yields a move any more
    pub fn is_game_over(&self) -> bool {
        let over = !self.is_move_possible();
        if over {
            debug!("no move left on the {0}x{0} grid", self.grid_dimension());
        }
        over
    }

    /// Whether at least one direction yields a move
    pub fn is_move_possible(&self) -> bool {
        probe::is_move_possible(&self.cells)
    }

    /// Directions that would change the grid
    pub fn available_directions(&self) -> Vec<Direction> {
        probe::available_directions(&self.cells)
    }

    /// Snapshot of the cell at column `x`, row `y`
    pub fn cell_view(&self, x: usize, y: usize) -> Option<CellView> {
        self.tile(TileIndex::new(x, y)).map(CellView::from)
    }

    /// Tile at `index`
    pub fn tile(&self, index: TileIndex) -> Option<&Tile> {
        self.cells.get(index.as_array_index())
    }

    /// Replace the tile at `index`, returning the previous one
    pub fn set_tile(&mut self, index: TileIndex, tile: Tile) -> Option<Tile> {
        self.cells
            .get_mut(index.as_array_index())
            .map(|cell| std::mem::replace(cell, tile))
    }

    /// Step the tile at `index` one cell in `direction`
    ///
    /// Returns the tile's new index, or `None` when it cannot step (ghost,
    /// edge, or occupied destination).
    pub fn move_tile(&mut self, index: TileIndex, direction: Direction) -> Option<TileIndex> {
        resolution::move_tile(&mut self.cells, index, direction)
    }

    /// Number of non-empty cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|tile| !tile.is_ghost()).count()
    }

    /// Whether every cell holds a tile
    pub fn is_full(&self) -> bool {
        self.occupied_count() == self.cells.len()
    }

    /// Sum of all tile values
    pub fn value_sum(&self) -> u64 {
        self.cells
            .iter()
            .filter_map(Tile::value)
            .map(u64::from)
            .sum()
    }

    /// Highest tile value, `None` on an empty grid
    pub fn max_value(&self) -> Option<u32> {
        self.cells.iter().filter_map(Tile::value).max()
    }

    /// Underlying cell array indexed `[x, y]`
    pub const fn cells(&self) -> &Array2<Tile> {
        &self.cells
    }

    /// Row-major values with 0 for empty cells
    pub fn rows(&self) -> Vec<Vec<u32>> {
        let size = self.grid_dimension();
        (0..size)
            .map(|y| {
                (0..size)
                    .map(|x| {
                        self.tile(TileIndex::new(x, y))
                            .and_then(Tile::value)
                            .unwrap_or(0)
                    })
                    .collect()
            })
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell_width = 7;
        let size = self.grid_dimension();
        let border = format!("+{}", format!("{}+", "-".repeat(cell_width)).repeat(size));

        writeln!(f, "{border}")?;
        for y in 0..size {
            write!(f, "|")?;
            for x in 0..size {
                let text = self
                    .tile(TileIndex::new(x, y))
                    .map_or_else(String::new, |tile| {
                        if tile.is_fresh() {
                            format!("{}*", tile.label())
                        } else {
                            tile.label()
                        }
                    });
                write!(f, "{text:^cell_width$}|")?;
            }
            writeln!(f)?;
            writeln!(f, "{border}")?;
        }
        Ok(())
    }
}
