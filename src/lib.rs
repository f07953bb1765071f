//! Tile-merging sliding puzzle played on a grid sized by difficulty
//!
//! Each turn slides every tile towards one edge, merges equal pairs once,
//! spawns a new 2 or 4 on a random empty cell and checks whether any move is
//! still possible. The rules engine is independent of rendering: a terminal
//! engine, PNG screenshots and a batch simulator are built on top of it.

#![forbid(unsafe_code)]

/// Rules engine: resolution, probing and spawning
pub mod algorithm;
/// Batch simulation and statistics
pub mod analysis;
/// Tiles, directions, difficulty and the grid
pub mod board;
/// Terminal engine, screenshots, configuration and error handling
pub mod io;

pub use board::difficulty::Difficulty;
pub use board::direction::{Direction, TileIndex};
pub use board::{CellView, Grid};
pub use io::error::{GameError, Result};
