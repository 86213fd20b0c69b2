//! User registry CLI for validating and registering users.
//!
//! This binary delegates to `user_registry::cli` for dispatch and output,
//! keeping the CLI behaviour testable without spawning a process.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use user_registry::RegistrySettings;
use user_registry::cli::{Cli, run};
use user_registry::observability::init_tracing;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{message}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli) -> Result<(), String> {
    let settings = RegistrySettings::load_ambient().map_err(|err| err.to_string())?;
    init_tracing(&settings);
    run(cli, &settings, io::stdout().lock()).map_err(|err| err.to_string())
}
