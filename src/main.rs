//! CLI entry point for greedy region-growing segmentation

use clap::Parser;
use regiongrow::io::cli::{Cli, FileProcessor};

fn main() -> regiongrow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
