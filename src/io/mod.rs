//! Input/output operations: terminal engine, screenshots, configuration and errors

/// Command-line interface and mode selection
pub mod cli;
/// Game constants and defaults
pub mod configuration;
/// Terminal render and input loop
pub mod engine;
/// Error types
pub mod error;
/// Screenshot rendering and export
pub mod image;
/// Key state to command translation
pub mod input;
/// Simulation progress display
pub mod progress;
