//! Batch simulation of random-direction games and their statistics

/// Random-direction game batches
pub mod simulation;
/// Aggregated game results
pub mod statistics;
