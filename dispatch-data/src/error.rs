//! Error types for loading address tables and order manifests.

use camino::Utf8PathBuf;
use dispatch_core::AddressError;
use thiserror::Error;

/// Errors raised while loading an address table.
#[derive(Debug, Error)]
pub enum AddressTableError {
    /// The table file could not be opened.
    #[error("failed to open address table at {path:?}: {source}")]
    Open {
        /// Table location.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The table file is not a valid JSON address table.
    #[error("failed to parse address table JSON at {path:?}: {source}")]
    Parse {
        /// Table location.
        path: Utf8PathBuf,
        /// Underlying decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// An in-memory table is not a valid JSON address table.
    #[error("failed to parse address table JSON: {0}")]
    ParseInline(#[source] serde_json::Error),
}

/// Errors raised while loading or resolving an order manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file could not be opened.
    #[error("failed to open order manifest at {path:?}: {source}")]
    Open {
        /// Manifest location.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The manifest file is not valid JSON.
    #[error("failed to parse order manifest JSON at {path:?}: {source}")]
    Parse {
        /// Manifest location.
        path: Utf8PathBuf,
        /// Underlying decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// The pickup point key is missing from the address table.
    #[error("unknown pickup point: {0}")]
    UnknownPickupPoint(#[source] AddressError),
    /// An order without explicit coordinates names an unknown address.
    #[error("order #{position} has no coordinates and {source}")]
    UnknownAddress {
        /// One-based position of the order in the manifest.
        position: usize,
        /// Lookup failure.
        #[source]
        source: AddressError,
    },
    /// An order sets only one of latitude and longitude.
    #[error("order #{position} for {key:?} must set both latitude and longitude or neither")]
    PartialCoordinates {
        /// One-based position of the order in the manifest.
        position: usize,
        /// Address key of the order.
        key: String,
    },
}
