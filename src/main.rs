//! CLI entry point for rendering the gamutile tile set

use clap::Parser;
use gamutile::io::cli::{Cli, TileSetProcessor};

fn main() -> gamutile::Result<()> {
    let cli = Cli::parse();
    let mut processor = TileSetProcessor::new(cli);
    processor.process().map(|_| ())
}
