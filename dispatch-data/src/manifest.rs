//! Order manifests: JSON descriptions of one simulation run.

use std::io::BufReader;

use camino::Utf8Path;
use dispatch_core::{Address, AddressBook, PendingOrder, PickupPoint};
use geo::Coord;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::fs::open_utf8_file;
use crate::{DEFAULT_PICKUP_POINT, ManifestError};

/// One order as written in a manifest.
///
/// Coordinates are optional; when both are absent the order is placed at
/// its address table entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestOrder {
    /// Key into the address table.
    pub address_key: String,
    /// Minutes until the order is ready.
    pub duration: u32,
    /// Per-order cooking time override, in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooking_minutes: Option<u32>,
    /// Explicit latitude in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Explicit longitude in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl ManifestOrder {
    /// An order at its address table entry.
    #[must_use]
    pub fn new(address_key: impl Into<String>, duration: u32) -> Self {
        Self {
            address_key: address_key.into(),
            duration,
            cooking_minutes: None,
            latitude: None,
            longitude: None,
        }
    }
}

/// A simulation run: pickup point, optional batch cap and orders.
///
/// # Examples
/// ```
/// use dispatch_data::{OrderManifest, bundled_address_table};
///
/// let manifest: OrderManifest = serde_json::from_str(
///     r#"{ "orders": [ { "address_key": "Ямская 10", "duration": 15 } ] }"#,
/// )?;
/// let simulation = manifest.resolve(&bundled_address_table()?)?;
/// assert_eq!(simulation.orders.len(), 1);
/// assert_eq!(simulation.max_deliveries, None);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderManifest {
    /// Address key of the pickup point.
    #[serde(default = "default_pickup_point")]
    pub pickup_point: String,
    /// Batch cap for this run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_deliveries: Option<usize>,
    /// Orders in submission order.
    #[serde(default)]
    pub orders: Vec<ManifestOrder>,
}

fn default_pickup_point() -> String {
    DEFAULT_PICKUP_POINT.to_owned()
}

/// A manifest with every address resolved, ready for the calculator.
#[derive(Debug, Clone, PartialEq)]
pub struct Simulation {
    /// Where every trip starts.
    pub pickup: PickupPoint,
    /// Orders in submission order.
    pub orders: Vec<PendingOrder>,
    /// Batch cap requested by the manifest.
    pub max_deliveries: Option<usize>,
}

impl OrderManifest {
    /// Resolve the pickup point and order coordinates through `book`.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::UnknownPickupPoint`] when the pickup key is
    /// unknown, [`ManifestError::PartialCoordinates`] when an order sets
    /// only one coordinate, and [`ManifestError::UnknownAddress`] when an
    /// order without coordinates names an unknown key.
    pub fn resolve(&self, book: &impl AddressBook) -> Result<Simulation, ManifestError> {
        let pickup = book
            .resolve(&self.pickup_point)
            .map(PickupPoint::from_address)
            .map_err(ManifestError::UnknownPickupPoint)?;
        let orders = (1..)
            .zip(&self.orders)
            .map(|(position, order)| resolve_order(position, order, book))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Simulation {
            pickup,
            orders,
            max_deliveries: self.max_deliveries,
        })
    }
}

fn resolve_order(
    position: usize,
    order: &ManifestOrder,
    book: &impl AddressBook,
) -> Result<PendingOrder, ManifestError> {
    let location = match (order.latitude, order.longitude) {
        (Some(latitude), Some(longitude)) => Coord {
            x: longitude,
            y: latitude,
        },
        (None, None) => book
            .resolve(&order.address_key)
            .map(Address::location)
            .map_err(|source| ManifestError::UnknownAddress { position, source })?,
        _ => {
            return Err(ManifestError::PartialCoordinates {
                position,
                key: order.address_key.clone(),
            });
        }
    };
    let mut pending = PendingOrder::new(order.address_key.clone(), location, order.duration);
    pending.cooking_minutes = order.cooking_minutes;
    Ok(pending)
}

/// Load an order manifest from a JSON file.
///
/// # Errors
///
/// Returns [`ManifestError::Open`] when the file cannot be opened and
/// [`ManifestError::Parse`] when its contents are not a valid manifest.
pub fn load_manifest(path: &Utf8Path) -> Result<OrderManifest, ManifestError> {
    let file = open_utf8_file(path).map_err(|source| ManifestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let manifest: OrderManifest =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(
        "loaded {} orders for pickup point {:?} from {path}",
        manifest.orders.len(),
        manifest.pickup_point
    );
    Ok(manifest)
}
