//! Terminal render and input loop driving a grid turn by turn

use crate::board::grid::Grid;
use crate::io::error::Result;
use crate::io::image::export_screenshot;
use crate::io::input::{Command, InputState, Key};
use log::{debug, info};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No move is possible any more
    GameOver,
    /// The player pressed escape
    Quit,
    /// The input stream ended
    InputClosed,
}

/// Owns the grid and translates player input into turns
#[derive(Debug)]
pub struct Engine {
    grid: Grid,
    input: InputState,
    screenshot_dir: PathBuf,
    turns: usize,
}

impl Engine {
    /// Create an engine around an existing grid
    pub fn new(grid: Grid, screenshot_dir: impl Into<PathBuf>) -> Self {
        Self {
            grid,
            input: InputState::new(),
            screenshot_dir: screenshot_dir.into(),
            turns: 0,
        }
    }

    /// Grid being played
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Turns played so far
    pub const fn turns(&self) -> usize {
        self.turns
    }

    /// Feed one sample of pressed keys and act on the resulting command
    ///
    /// Returns the outcome when the game ends with this sample.
    ///
    /// # Errors
    ///
    /// Returns an error if a screenshot cannot be written or the board cannot
    /// be rendered to `writer`
    pub fn handle_keys<W: Write>(
        &mut self,
        pressed: &[Key],
        writer: &mut W,
    ) -> Result<Option<Outcome>> {
        match self.input.poll(pressed) {
            Command::Move(direction) => {
                let summary = self.grid.play_turn(direction);
                self.turns += 1;
                debug!(
                    "turn {} moved {direction}, grid changed: {}",
                    self.turns,
                    summary.changed()
                );
                self.render(writer)?;

                if self.grid.is_game_over() {
                    info!("game over after {} turns", self.turns);
                    writeln!(writer, "Game over after {} turns.", self.turns)?;
                    return Ok(Some(Outcome::GameOver));
                }
            }
            Command::Screenshot => {
                let path = export_screenshot(&self.grid, &self.screenshot_dir)?;
                writeln!(writer, "Screenshot saved to {}", path.display())?;
            }
            Command::Quit => return Ok(Some(Outcome::Quit)),
            Command::Idle => {}
        }
        Ok(None)
    }

    /// Play until game over, escape, or end of input
    ///
    /// Every input line is one key press followed by a release, so each line
    /// yields at most one command. Tokens that are not keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input, writing output, or saving a
    /// screenshot fails
    pub fn run<R: BufRead, W: Write>(&mut self, reader: R, writer: &mut W) -> Result<Outcome> {
        info!("starting a {0}x{0} game", self.grid.grid_dimension());
        self.render(writer)?;

        if self.grid.is_game_over() {
            writeln!(writer, "Game over before the first turn.")?;
            return Ok(Outcome::GameOver);
        }

        for line in reader.lines() {
            let line = line?;
            let pressed: Vec<Key> = line.split_whitespace().filter_map(Key::parse).collect();

            let outcome = self.handle_keys(&pressed, writer)?;
            self.handle_keys(&[], writer)?;

            if let Some(outcome) = outcome {
                return Ok(outcome);
            }
        }

        Ok(Outcome::InputClosed)
    }

    fn render<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, "Turn {}", self.turns)?;
        write!(writer, "{}", self.grid)?;
        writer.flush()?;
        Ok(())
    }
}
