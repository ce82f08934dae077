//! icon-resizer CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, resize the tree, and
//! exit. The process exits 0 even when individual files fail; for
//! programmatic use prefer the library API (`icon_resizer::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
