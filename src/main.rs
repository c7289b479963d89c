//! CLI entry point for socket-based wave function collapse

use clap::Parser;
use wavetile::io::cli::{Cli, run};

fn main() -> wavetile::Result<()> {
    let cli = Cli::parse();
    run(&cli)
}
