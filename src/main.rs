//! # rulestitch CLI
//!
//! Binary entry point for the `rulestitch` command-line tool.
//!
//! Its responsibilities are parsing arguments with `clap`, initialising
//! logging, and dispatching to the command implementations. All resolution
//! logic lives in the library crate; the binary is a thin wrapper over it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
