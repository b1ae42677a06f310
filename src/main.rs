//! # Federation Config CLI
//!
//! This is the binary entry point for the `federation-config` command-line
//! tool.
//!
//! Its responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Running the selected command.
//! - Reporting errors with hints.
//!
//! All configuration logic lives in the `federation_config` library; the
//! binary only loads options, calls into it, and writes the result.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
