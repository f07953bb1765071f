//! Rules engine: turn resolution, move probing and tile spawning

/// Read-only detection of remaining moves
pub mod probe;
/// Slide and merge resolution for one turn
pub mod resolution;
/// Seeded random source for spawns
pub mod spawn;
