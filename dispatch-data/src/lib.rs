//! File-backed reference data for the dispatch simulator.
//!
//! Responsibilities:
//! - Load the static address table from JSON.
//! - Load order manifests describing one simulation run.
//! - Ship the Moscow address table used by the dispatch scenarios.
//!
//! Boundaries:
//! - Do not encode dispatch rules (live in `dispatch-batcher`).
//! - File access goes through `cap-std` with ambient authority.

#![forbid(unsafe_code)]

mod addresses;
mod error;
pub mod fs;
mod manifest;

pub use addresses::{DEFAULT_PICKUP_POINT, bundled_address_table, load_address_table, parse_address_table};
pub use error::{AddressTableError, ManifestError};
pub use manifest::{ManifestOrder, OrderManifest, Simulation, load_manifest};
