//! Tests for command-line parsing, validation and mode dispatch

#[cfg(test)]
mod tests {
    use clap::Parser;
    use grid2048::board::difficulty::Difficulty;
    use grid2048::io::cli::{Cli, GameRunner, KEY_HELP};
    use grid2048::io::configuration::{DEFAULT_MAX_TURNS, DEFAULT_SEED, SCREENSHOT_DIR};
    use grid2048::io::engine::Outcome;
    use std::io::Cursor;
    use std::path::PathBuf;

    // Tests CLI parsing with no arguments
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["program"]);

        assert_eq!(cli.difficulty, Difficulty::Normal);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.screenshot_dir, PathBuf::from(SCREENSHOT_DIR));
        assert_eq!(cli.simulate, None);
        assert_eq!(cli.max_turns, DEFAULT_MAX_TURNS);
        assert!(!cli.quiet);
        assert!(cli.should_show_progress());
        assert!(cli.simulation_config().is_none());
    }

    // Tests CLI parsing with all available arguments
    // Verified by renaming the long flags
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "--difficulty",
            "hard",
            "--seed",
            "7",
            "--screenshot-dir",
            "out",
            "--simulate",
            "12",
            "-t",
            "300",
            "--quiet",
        ]);

        assert_eq!(cli.difficulty, Difficulty::Hard);
        assert_eq!(cli.screenshot_dir, PathBuf::from("out"));
        assert!(!cli.should_show_progress());

        let config = cli.simulation_config().unwrap();
        assert_eq!(config.games, 12);
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.seed, 7);
        assert_eq!(config.max_turns, 300);
    }

    // Tests unknown difficulties are rejected by the parser
    // Verified by accepting free-form difficulty strings
    #[test]
    fn test_cli_rejects_unknown_difficulty() {
        assert!(Cli::try_parse_from(["program", "--difficulty", "extreme"]).is_err());
    }

    // Tests argument combinations that cannot run
    // Verified by accepting empty simulations
    #[test]
    fn test_validate() {
        assert!(Cli::parse_from(["program"]).validate().is_ok());
        assert!(Cli::parse_from(["program", "--max-turns", "0"]).validate().is_ok());
        assert!(Cli::parse_from(["program", "--simulate", "0"]).validate().is_err());
        assert!(
            Cli::parse_from(["program", "--simulate", "2", "--max-turns", "0"])
                .validate()
                .is_err()
        );
    }

    // Tests an interactive game prints key help and plays from the reader
    // Verified by suppressing the help unconditionally
    #[test]
    fn test_play_interactive() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().to_string_lossy().into_owned();
        let runner = GameRunner::new(Cli::parse_from([
            "program",
            "--difficulty",
            "easy",
            "--screenshot-dir",
            dir.as_str(),
        ]));

        let mut output = Vec::new();
        let outcome = runner.play(Cursor::new("up\nesc\n"), &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert_eq!(outcome, Outcome::Quit);
        assert!(text.starts_with(KEY_HELP));
        assert!(text.contains("Turn 1"));
    }

    // Tests quiet mode hides the key help
    // Verified by ignoring the quiet flag
    #[test]
    fn test_play_quiet() {
        let runner = GameRunner::new(Cli::parse_from(["program", "--quiet"]));

        let mut output = Vec::new();
        runner.play(Cursor::new(""), &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(!text.contains(KEY_HELP));
        assert!(text.starts_with("Turn 0"));
    }

    // Tests a simulation batch writes its report
    // Verified by writing the report before playing
    #[test]
    fn test_run_simulation_report() {
        let cli = Cli::parse_from(["program", "--simulate", "3", "--difficulty", "easy", "--quiet"]);
        let config = cli.simulation_config().unwrap();
        let runner = GameRunner::new(cli);

        let mut output = Vec::new();
        let report = runner.run_simulation_to(&config, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert_eq!(report.games(), 3);
        assert!(text.starts_with("Games: 3"));
    }
}
