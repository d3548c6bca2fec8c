//! Cmakestack CLI - dependency-ordered build orchestrator for CMake stacks
//!
//! Entry point for the cmakestack command-line application.

use anyhow::Result;
use clap::Parser;

use cmakestack::cli::output::{display_error, init_tracing};
use cmakestack::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Run the command and handle errors
    match cli.run() {
        Ok(()) => Ok(()),
        Err(e) => {
            display_error(&e);
            std::process::exit(1);
        }
    }
}
