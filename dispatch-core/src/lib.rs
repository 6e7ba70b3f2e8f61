//! Core domain types for the dispatch simulator.
//!
//! The types here describe a single simulation run: the pickup point every
//! courier departs from, the orders waiting to be delivered, and the plan
//! produced once those orders are grouped into courier batches. Geometry is
//! expressed with [`geo::Coord`] using WGS84 degrees, `x = longitude` and
//! `y = latitude`.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod address;
pub mod geodesy;
pub mod order;
pub mod plan;
pub mod policy;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use address::{Address, AddressBook, AddressError, MemoryAddressBook};
pub use geodesy::{EARTH_RADIUS_METRES, haversine_distance, haversine_distance_with_radius};
pub use order::{Order, PendingOrder, PickupPoint};
pub use plan::{BatchSummary, DeliveryPlan, OrderDetail, RouteLeg};
pub use policy::{DispatchPolicy, PolicyError};
