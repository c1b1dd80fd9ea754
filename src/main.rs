//! CLI entry point for capturing quantum moments from photos

use clap::Parser;
use qmemento::io::cli::{Cli, init_tracing};

fn main() -> qmemento::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet);
    cli.execute()
}
