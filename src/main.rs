//! ytcrop CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, run the crop, and exit
//! with a failure status when the input is missing or the crop fails.
//! For programmatic use, prefer the library API (`ytcrop::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        // The runner has already reported the failure to the user
        Err(_) => ExitCode::FAILURE,
    }
}
