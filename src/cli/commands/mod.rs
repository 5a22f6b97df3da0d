//! Command implementations for the AFI validator CLI
//!
//! Each subcommand lives in its own module; shared helpers for logging,
//! configuration and input discovery are in [`shared`].

pub mod inspect;
pub mod shared;
pub mod validate;

pub use shared::RunOutcome;

use crate::cli::args::{Args, Commands};

/// Main command runner
///
/// Dispatches to the subcommand handler. With no subcommand there is
/// nothing to do and the outcome is empty.
pub async fn run(args: Args) -> anyhow::Result<RunOutcome> {
    match args.command {
        Some(Commands::Validate(validate_args)) => validate::run_validate(validate_args).await,
        Some(Commands::Inspect(inspect_args)) => inspect::run_inspect(inspect_args).await,
        None => Ok(RunOutcome::default()),
    }
}
