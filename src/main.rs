//! CLI entry point for the sliding picture puzzle

use clap::Parser;
use picslide::io::cli::{Cli, PuzzleRunner};

fn main() -> picslide::Result<()> {
    let cli = Cli::parse();
    let runner = PuzzleRunner::new(cli);
    runner.run()
}
