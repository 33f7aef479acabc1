//! CLI entry point for maze-cat glyph generation

use catwalk::io::cli::{BatchProcessor, Cli};
use clap::Parser;

fn main() -> catwalk::Result<()> {
    let cli = Cli::parse();
    let mut processor = BatchProcessor::new(cli);
    processor.process()
}
