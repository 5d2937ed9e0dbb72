//! assetfit CLI entrypoint.
//!
//! Parses args and hands them to the `cli` runner. Any error aborts the run
//! with a non-zero exit status. For programmatic use, prefer `assetfit::api`.

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
