//! Benchmark support utilities for the dispatch calculator.
//!
//! Generates reproducible order sets scattered around a pickup point, with
//! a share of orders sitting on shared addresses.

use dispatch_core::{Address, MemoryAddressBook, PendingOrder, PickupPoint};
use geo::Coord;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed for deterministic random number generation in benchmarks.
pub const BENCHMARK_SEED: u64 = 42;

/// Number of distinct delivery addresses orders are drawn from.
const ADDRESS_COUNT: usize = 40;

/// Half-width of the delivery area around the pickup point (in degrees).
/// 0.02 degrees of latitude is about 2.2 km.
const AREA_SPREAD: f64 = 0.02;

const PICKUP: Coord<f64> = Coord {
    x: 37.607_21,
    y: 55.789_02,
};

/// Pickup point every benchmark trip starts from.
#[must_use]
pub fn pickup_point() -> PickupPoint {
    PickupPoint::new(PICKUP, "Benchmark pickup")
}

/// Generate an address book and `count` orders drawn from it.
#[must_use]
pub fn generate_orders(count: usize, seed: u64) -> (MemoryAddressBook, Vec<PendingOrder>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let addresses: Vec<(String, Address)> = (0..ADDRESS_COUNT)
        .map(|index| {
            let key = format!("address-{index}");
            #[expect(clippy::float_arithmetic, reason = "Required for coordinate offset")]
            let address = Address::new(
                PICKUP.y + rng.gen_range(-AREA_SPREAD..AREA_SPREAD),
                PICKUP.x + rng.gen_range(-AREA_SPREAD..AREA_SPREAD),
                key.clone(),
            );
            (key, address)
        })
        .collect();

    let orders = (0..count)
        .filter_map(|_| {
            let (key, address) = addresses.get(rng.gen_range(0..ADDRESS_COUNT))?;
            Some(PendingOrder::at_address(
                key.clone(),
                address,
                rng.gen_range(0..=90),
            ))
        })
        .collect();

    (addresses.into_iter().collect(), orders)
}
