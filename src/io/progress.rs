//! Progress display for simulation batches

use crate::analysis::statistics::GameRecord;
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};

/// Single progress bar counting finished games
pub struct SimulationProgress {
    bar: ProgressBar,
    best_tile: u32,
}

impl SimulationProgress {
    /// Create a progress bar for `games` games
    pub fn new(games: usize) -> Self {
        let bar = ProgressBar::new(games as u64);
        bar.set_style(Self::style());
        Self { bar, best_tile: 0 }
    }

    /// Create a progress bar that draws nothing
    pub fn hidden(games: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(games as u64);
        Self { bar, best_tile: 0 }
    }

    /// Record a finished game
    pub fn game_finished(&mut self, record: &GameRecord) {
        self.best_tile = self.best_tile.max(record.max_tile);
        self.bar.set_message(format!("best tile {}", self.best_tile));
        self.bar.inc(1);
    }

    /// Games recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Highest tile seen across recorded games
    pub const fn best_tile(&self) -> u32 {
        self.best_tile
    }

    /// Close the bar
    pub fn finish(&self) {
        self.bar.finish_with_message(format!("done, best tile {}", self.best_tile));
    }

    fn style() -> ProgressStyle {
        let template = format!(
            "[{{elapsed_precise}}] Games: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        );
        ProgressStyle::default_bar()
            .template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏ ")
    }
}
