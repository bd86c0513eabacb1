//! Command-line interface layer.
//!
//! Commands return a [`commands::CommandResult`]; printing and the exit status
//! are decided here so the core stays usable as a library.

use std::process::ExitCode;

use anyhow::Result;

pub mod args;
pub mod commands;
mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let result = run::run(args)?;
    report::print(&result, verbose);

    if result.check_failed {
        Ok(ExitStatus::Failure.into())
    } else {
        Ok(ExitStatus::Success.into())
    }
}
