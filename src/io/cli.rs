//! Command-line interface for interactive play and simulation batches

use crate::analysis::simulation::{SimulationConfig, run_simulation};
use crate::analysis::statistics::SimulationReport;
use crate::board::difficulty::Difficulty;
use crate::board::grid::Grid;
use crate::io::configuration::{DEFAULT_MAX_TURNS, DEFAULT_SEED, SCREENSHOT_DIR};
use crate::io::engine::{Engine, Outcome};
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::SimulationProgress;
use clap::Parser;
use log::info;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Key bindings shown before an interactive game
pub const KEY_HELP: &str =
    "Keys: left/h, right/l, up/k, down/j (or arrow keys) then Enter; s = screenshot; q = quit";

#[derive(Parser, Debug)]
#[command(name = "grid2048")]
#[command(
    author,
    version,
    about = "Slide and merge tiles on a grid sized by difficulty"
)]
/// Command-line arguments for the game
pub struct Cli {
    /// Difficulty selecting the grid size (easy 3x3, normal 4x4, hard 5x5)
    #[arg(short, long, value_enum, default_value_t = Difficulty::Normal)]
    pub difficulty: Difficulty,

    /// Random seed for reproducible spawns
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Directory screenshots are saved to
    #[arg(long, value_name = "DIR", default_value = SCREENSHOT_DIR)]
    pub screenshot_dir: PathBuf,

    /// Play this many games with random directions instead of an interactive game
    #[arg(long, value_name = "GAMES")]
    pub simulate: Option<usize>,

    /// Turn cap for each simulated game
    #[arg(short = 't', long, default_value_t = DEFAULT_MAX_TURNS)]
    pub max_turns: usize,

    /// Suppress help and progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress and key help should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Simulation parameters, when a simulation was requested
    pub const fn simulation_config(&self) -> Option<SimulationConfig> {
        match self.simulate {
            Some(games) => Some(SimulationConfig {
                games,
                difficulty: self.difficulty,
                seed: self.seed,
                max_turns: self.max_turns,
            }),
            None => None,
        }
    }

    /// Reject argument combinations that cannot run
    ///
    /// # Errors
    ///
    /// Returns an error if the simulation would play no game or no turn
    pub fn validate(&self) -> Result<()> {
        if self.simulate == Some(0) {
            return Err(invalid_parameter(
                "simulate",
                &0,
                &"at least one game must be simulated",
            ));
        }
        if self.simulate.is_some() && self.max_turns == 0 {
            return Err(invalid_parameter(
                "max-turns",
                &0,
                &"simulated games need at least one turn",
            ));
        }
        Ok(())
    }
}

/// Runs the mode selected on the command line
pub struct GameRunner {
    cli: Cli,
}

impl GameRunner {
    /// Create a runner for the parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run an interactive game on stdin/stdout or a simulation batch
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are invalid, terminal I/O fails or a
    /// screenshot cannot be saved
    pub fn run(&self) -> Result<()> {
        self.cli.validate()?;

        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        if let Some(config) = self.cli.simulation_config() {
            self.run_simulation_to(&config, &mut out)?;
            return Ok(());
        }

        let stdin = std::io::stdin();
        let outcome = self.play(stdin.lock(), &mut out)?;
        info!("game ended: {outcome:?}");
        Ok(())
    }

    /// Play one interactive game reading keys from `reader`
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails or a screenshot cannot be
    /// saved
    pub fn play<R: BufRead, W: Write>(&self, reader: R, writer: &mut W) -> Result<Outcome> {
        if self.cli.should_show_progress() {
            writeln!(writer, "{KEY_HELP}")?;
        }

        let grid = Grid::new(self.cli.difficulty, self.cli.seed);
        let mut engine = Engine::new(grid, self.cli.screenshot_dir.clone());
        engine.run(reader, writer)
    }

    /// Run a simulation batch and write its report to `writer`
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be written
    pub fn run_simulation_to<W: Write>(
        &self,
        config: &SimulationConfig,
        writer: &mut W,
    ) -> Result<SimulationReport> {
        let mut progress = if self.cli.should_show_progress() {
            SimulationProgress::new(config.games)
        } else {
            SimulationProgress::hidden(config.games)
        };

        let report = run_simulation(config, |_, record| progress.game_finished(record));
        progress.finish();

        write!(writer, "{report}")?;
        Ok(report)
    }
}
