//! Facade crate for the dispatch batching simulator.
//!
//! This crate re-exports the domain types and the delivery time calculator,
//! and exposes address table and manifest loading behind the `data` feature.

#![forbid(unsafe_code)]

pub use dispatch_batcher::{
    Batcher, CalculationError, DeliveryTimeCalculator, batch_minutes, direct_route_minutes,
    optimise_route, third_party_call_minutes, timed_route,
};
pub use dispatch_core::{
    Address, AddressBook, AddressError, BatchSummary, DeliveryPlan, DispatchPolicy,
    EARTH_RADIUS_METRES, MemoryAddressBook, Order, OrderDetail, PendingOrder, PickupPoint,
    PolicyError, RouteLeg, haversine_distance,
};

#[cfg(feature = "test-support")]
pub use dispatch_core::test_support;

#[cfg(feature = "data")]
pub use dispatch_data::{
    AddressTableError, DEFAULT_PICKUP_POINT, ManifestError, ManifestOrder, OrderManifest,
    Simulation, bundled_address_table, load_address_table, load_manifest, parse_address_table,
};
