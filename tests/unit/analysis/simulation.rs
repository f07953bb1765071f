//! Tests for random-direction batch play

#[cfg(test)]
mod tests {
    use grid2048::analysis::simulation::{SimulationConfig, run_simulation, simulate_game};
    use grid2048::board::difficulty::Difficulty;
    use grid2048::io::configuration::{DEFAULT_MAX_TURNS, DEFAULT_SEED};

    // Tests default parameters come from the configuration
    // Verified by changing the default seed
    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();

        assert_eq!(config.games, 1);
        assert_eq!(config.difficulty, Difficulty::Normal);
        assert_eq!(config.seed, DEFAULT_SEED);
        assert_eq!(config.max_turns, DEFAULT_MAX_TURNS);
    }

    // Tests an uncapped game runs until no move is left
    // Verified by stopping after the first turn
    #[test]
    fn test_game_runs_to_game_over() {
        let record = simulate_game(Difficulty::Easy, 5, DEFAULT_MAX_TURNS);

        assert!(record.game_over);
        assert!(record.turns > 0);
        assert!(record.max_tile >= 4);
        assert!(record.max_tile.is_power_of_two());
    }

    // Tests the turn cap stops a game early
    // Verified by ignoring the cap
    #[test]
    fn test_turn_cap() {
        let record = simulate_game(Difficulty::Hard, 5, 3);

        assert_eq!(record.turns, 3);
        assert!(!record.game_over);
    }

    // Tests games are reproducible from their seed
    // Verified by sharing one direction stream across games
    #[test]
    fn test_simulation_is_deterministic() {
        let first = simulate_game(Difficulty::Normal, 77, 500);
        let second = simulate_game(Difficulty::Normal, 77, 500);

        assert_eq!(first, second);
    }

    // Tests a batch plays every game with consecutive seeds
    // Verified by reusing the first seed for every game
    #[test]
    fn test_batch_uses_consecutive_seeds() {
        let config = SimulationConfig {
            games: 4,
            difficulty: Difficulty::Easy,
            seed: 10,
            max_turns: 1_000,
        };

        let mut seen = Vec::new();
        let report = run_simulation(&config, |game, record| seen.push((game, *record)));

        assert_eq!(report.games(), 4);
        assert_eq!(seen.len(), 4);
        for (game, record) in seen {
            assert_eq!(record, simulate_game(Difficulty::Easy, 10 + game as u64, 1_000));
            assert_eq!(report.records().get(game), Some(&record));
        }
    }
}
