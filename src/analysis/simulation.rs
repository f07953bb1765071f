//! Batch play with uniformly random directions
//!
//! Simulated games exercise the rules engine end to end: every turn picks one
//! of the four directions at random, plays it like the interactive engine
//! does, and the game stops on game over or at the turn cap.

use crate::analysis::statistics::{GameRecord, SimulationReport};
use crate::board::difficulty::Difficulty;
use crate::board::direction::Direction;
use crate::board::grid::Grid;
use crate::io::configuration::{DEFAULT_MAX_TURNS, DEFAULT_SEED};
use log::{debug, info};
use rand::seq::IndexedRandom;
use rand::{SeedableRng, rngs::StdRng};

// Keeps the direction stream independent from the grid's spawn stream
const DIRECTION_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Parameters of a simulation batch
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    /// Number of games to play
    pub games: usize,
    /// Difficulty of every game
    pub difficulty: Difficulty,
    /// Seed of the first game, later games use consecutive seeds
    pub seed: u64,
    /// Turn cap per game
    pub max_turns: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: 1,
            difficulty: Difficulty::default(),
            seed: DEFAULT_SEED,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }
}

/// Play one game with random directions
pub fn simulate_game(difficulty: Difficulty, seed: u64, max_turns: usize) -> GameRecord {
    let mut grid = Grid::new(difficulty, seed);
    let mut chooser = StdRng::seed_from_u64(seed ^ DIRECTION_SEED_SALT);
    let mut turns = 0;

    while turns < max_turns && !grid.is_game_over() {
        let Some(&direction) = Direction::ALL.choose(&mut chooser) else {
            break;
        };
        grid.play_turn(direction);
        turns += 1;
    }

    let record = GameRecord {
        turns,
        max_tile: grid.max_value().unwrap_or(0),
        game_over: grid.is_game_over(),
    };
    debug!("seed {seed}: {record:?}");
    record
}

/// Play every game of the batch, reporting each finished game to `on_game`
pub fn run_simulation(
    config: &SimulationConfig,
    mut on_game: impl FnMut(usize, &GameRecord),
) -> SimulationReport {
    info!(
        "simulating {} {} games from seed {}",
        config.games, config.difficulty, config.seed
    );

    let mut report = SimulationReport::new();
    for game in 0..config.games {
        let seed = config.seed.wrapping_add(game as u64);
        let record = simulate_game(config.difficulty, seed, config.max_turns);
        on_game(game, &record);
        report.record(record);
    }
    report
}
