//! Error types emitted by the dispatch CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use dispatch_batcher::CalculationError;
use dispatch_core::PolicyError;
use dispatch_data::{AddressTableError, ManifestError};
use thiserror::Error;

/// Errors emitted by the dispatch CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name of the option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// Two mutually exclusive options were both set.
    #[error("--{first} and --{second} cannot be used together")]
    ConflictingArguments {
        /// Flag name of the first option.
        first: &'static str,
        /// Flag name of the second option.
        second: &'static str,
    },
    /// A route time was negative or not a number.
    #[error("route minutes must be a non-negative number, got {value}")]
    InvalidRouteMinutes {
        /// Rejected value.
        value: f64,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag name of the option.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag name of the option.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag name of the option.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Loading the address table failed.
    #[error(transparent)]
    AddressTable(#[from] AddressTableError),
    /// Loading or resolving the order manifest failed.
    #[error(transparent)]
    Manifest(#[from] ManifestError),
    /// The dispatch policy failed validation.
    #[error("invalid dispatch policy: {0}")]
    Policy(#[from] PolicyError),
    /// The calculator rejected the simulation.
    #[error("simulation failed: {0}")]
    Calculation(#[from] CalculationError),
    /// Serialising the report failed.
    #[error("failed to serialise report: {0}")]
    SerialiseReport(#[source] serde_json::Error),
    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    WriteOutput(#[source] std::io::Error),
}
