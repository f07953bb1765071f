//! Grid cells: empty ghosts or power-of-two valued tiles
//!
//! A tile carries two per-turn flags. `fresh` marks a tile placed by a spawn
//! since the last resolved turn and only drives highlighting. `merged` marks a
//! tile doubled during the turn being resolved; such a tile cannot take part
//! in another merge until the turn ends, which rules out chain merges.

use crate::algorithm::spawn::RandomSpawner;

/// Content of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tile {
    /// Ghost cell holding no value
    #[default]
    Empty,
    /// Cell holding a power of two
    Valued {
        /// Tile value (2, 4, 8, ...)
        value: u32,
        /// Placed by a spawn since the last resolved turn
        fresh: bool,
        /// Doubled by a merge during the current turn
        merged: bool,
    },
}

/// Text size class used when drawing a tile's value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    /// One and two digit values
    Standard,
    /// 128, 256 and 512
    ThreeDigit,
    /// 1024 and above
    FourDigit,
    /// Ghost cells draw no text
    Hidden,
}

impl Tile {
    /// An empty cell
    pub const fn ghost() -> Self {
        Self::Empty
    }

    /// A plain valued tile with both turn flags cleared
    pub const fn with_value(value: u32) -> Self {
        Self::Valued {
            value,
            fresh: false,
            merged: false,
        }
    }

    /// A freshly spawned tile holding 2 or 4 with equal probability
    pub fn random(spawner: &mut RandomSpawner) -> Self {
        Self::Valued {
            value: spawner.random_value(),
            fresh: true,
            merged: false,
        }
    }

    /// Whether the cell is empty
    pub const fn is_ghost(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Held value, `None` for ghosts
    pub const fn value(&self) -> Option<u32> {
        match self {
            Self::Empty => None,
            Self::Valued { value, .. } => Some(*value),
        }
    }

    /// Whether the tile was spawned since the last resolved turn
    pub const fn is_fresh(&self) -> bool {
        matches!(self, Self::Valued { fresh: true, .. })
    }

    /// Whether the tile was produced by a merge this turn
    pub const fn is_merged(&self) -> bool {
        matches!(self, Self::Valued { merged: true, .. })
    }

    /// Whether this tile may merge into `target`
    ///
    /// Both tiles must hold the same value and neither may be the product of
    /// a merge earlier in the same turn.
    pub const fn is_mergeable(&self, target: &Self) -> bool {
        match (self, target) {
            (
                Self::Valued {
                    value,
                    merged: false,
                    ..
                },
                Self::Valued {
                    value: target_value,
                    merged: false,
                    ..
                },
            ) => *value == *target_value,
            _ => false,
        }
    }

    /// Double the value and lock the tile out of further merges this turn
    pub const fn apply_merge_doubling(&mut self) {
        if let Self::Valued { value, merged, .. } = self {
            *value *= 2;
            *merged = true;
        }
    }

    /// Clear both per-turn flags
    pub const fn end_turn_reset(&mut self) {
        if let Self::Valued { fresh, merged, .. } = self {
            *fresh = false;
            *merged = false;
        }
    }

    /// Text drawn on the tile, a single blank for ghosts
    pub fn label(&self) -> String {
        self.value()
            .map_or_else(|| " ".to_string(), |value| value.to_string())
    }

    /// Text size class for the tile's label
    pub const fn text_size(&self) -> TextSize {
        match self.value() {
            None => TextSize::Hidden,
            Some(value) if value > 512 => TextSize::FourDigit,
            Some(value) if value > 64 => TextSize::ThreeDigit,
            Some(_) => TextSize::Standard,
        }
    }
}
