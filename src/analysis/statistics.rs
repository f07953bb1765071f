//! Aggregated results of simulated games

use std::collections::BTreeMap;
use std::fmt;

/// Result of one simulated game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    /// Turns played
    pub turns: usize,
    /// Highest tile on the final grid
    pub max_tile: u32,
    /// The game stopped because no move was left (not because of the turn cap)
    pub game_over: bool,
}

/// Collection of game records with summary queries
#[derive(Debug, Clone, Default)]
pub struct SimulationReport {
    records: Vec<GameRecord>,
}

impl SimulationReport {
    /// Create an empty report
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Add one game's result
    pub fn record(&mut self, record: GameRecord) {
        self.records.push(record);
    }

    /// All recorded games in play order
    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    /// Number of recorded games
    pub const fn games(&self) -> usize {
        self.records.len()
    }

    /// Games that ended with no move left
    pub fn finished_games(&self) -> usize {
        self.records.iter().filter(|record| record.game_over).count()
    }

    /// Fewest turns any game lasted
    pub fn min_turns(&self) -> Option<usize> {
        self.records.iter().map(|record| record.turns).min()
    }

    /// Most turns any game lasted
    pub fn max_turns(&self) -> Option<usize> {
        self.records.iter().map(|record| record.turns).max()
    }

    /// Average game length
    pub fn mean_turns(&self) -> Option<f64> {
        if self.records.is_empty() {
            return None;
        }
        let total: usize = self.records.iter().map(|record| record.turns).sum();
        Some(total as f64 / self.records.len() as f64)
    }

    /// Number of games reaching each highest tile
    pub fn max_tile_histogram(&self) -> BTreeMap<u32, usize> {
        let mut histogram = BTreeMap::new();
        for record in &self.records {
            *histogram.entry(record.max_tile).or_insert(0) += 1;
        }
        histogram
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Games: {} ({} reached game over)",
            self.games(),
            self.finished_games()
        )?;

        if let (Some(min), Some(max), Some(mean)) =
            (self.min_turns(), self.max_turns(), self.mean_turns())
        {
            writeln!(f, "Turns: min {min}, max {max}, mean {mean:.1}")?;
        }

        writeln!(f, "Highest tile reached:")?;
        for (tile, count) in self.max_tile_histogram() {
            writeln!(f, "  {tile:>6}: {count}")?;
        }
        Ok(())
    }
}
