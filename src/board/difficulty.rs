//! Difficulty levels and the grid size each one plays on

use crate::io::configuration::{SIZE_EASY, SIZE_HARD, SIZE_NORMAL};
use clap::ValueEnum;
use std::fmt;

/// Difficulty setting selecting the grid dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Difficulty {
    /// 3x3 grid
    Easy,
    /// 4x4 grid
    #[default]
    Normal,
    /// 5x5 grid
    Hard,
}

impl Difficulty {
    /// Side length of the grid for this difficulty
    pub const fn grid_size(self) -> usize {
        match self {
            Self::Easy => SIZE_EASY,
            Self::Normal => SIZE_NORMAL,
            Self::Hard => SIZE_HARD,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "easy",
            Self::Normal => "normal",
            Self::Hard => "hard",
        };
        f.write_str(name)
    }
}
