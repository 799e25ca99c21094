//! CLI entry point for batch background and coverage analysis

use clap::Parser;
use eyespye::io::cli::{BatchRunner, Cli};
use eyespye::io::logging::init_tracing;

fn main() -> eyespye::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    BatchRunner::new(cli).run()
}
