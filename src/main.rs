//! CLI entry point for the tile-merging puzzle

use clap::Parser;
use grid2048::io::cli::{Cli, GameRunner};

fn main() -> grid2048::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let runner = GameRunner::new(cli);
    runner.run()
}
