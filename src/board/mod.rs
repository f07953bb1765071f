//! Board data structures
//!
//! This module contains the playing surface:
//! - Tiles and their per-turn flags
//! - Directions, indices and traversal ordering
//! - Difficulty to grid size mapping
//! - The grid and its engine-facing turn interface

/// Difficulty levels and grid sizes
pub mod difficulty;
/// Move directions and cell indices
pub mod direction;
/// Grid state and turn interface
pub mod grid;
/// Ghost and valued tiles
pub mod tile;

pub use grid::{CellView, Grid};
