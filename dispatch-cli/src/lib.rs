//! Command-line interface for the dispatch simulator.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use clap::{Parser, Subcommand};

mod error;
mod escalate;
mod report;
mod simulate;

pub use error::CliError;
pub use report::ReportFormat;

use escalate::{EscalateArgs, run_escalate};
use simulate::{SimulateArgs, run_simulate};

const ARG_MANIFEST: &str = "manifest";
const ARG_ADDRESSES: &str = "addresses";
const ARG_MAX_DELIVERIES: &str = "max-deliveries";
const ARG_FORMAT: &str = "format";
const ARG_READY_IN: &str = "ready-in";
const ARG_ROUTE_MINUTES: &str = "route-minutes";
const ARG_ADDRESS: &str = "address";
const ARG_PICKUP_POINT: &str = "pickup-point";
const ENV_MANIFEST: &str = "DISPATCH_CMDS_SIMULATE_MANIFEST";
const ENV_READY_IN: &str = "DISPATCH_CMDS_ESCALATE_READY_IN";
const ENV_ROUTE_MINUTES: &str = "DISPATCH_CMDS_ESCALATE_ROUTE_MINUTES";

/// Run the dispatch CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns a [`CliError`] when arguments, configuration, input files or the
/// simulation itself fail.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Simulate(args) => run_simulate(args, &mut stdout),
        Command::Escalate(args) => run_escalate(args, &mut stdout),
    }
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match dispatch_data::fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "dispatch-sim",
    about = "Simulate courier batching, routing and delivery times",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Group a manifest's orders into batches and report their times.
    Simulate(SimulateArgs),
    /// Compute when an order must be handed to a third-party courier.
    Escalate(EscalateArgs),
}

#[cfg(test)]
mod tests;
