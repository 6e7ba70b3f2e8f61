//! Proptest strategies for dispatch property tests.
//!
//! Orders are scattered within roughly 1.5 km of the pickup point so that a
//! realistic share of them can be batched together while others fall outside
//! the consolidation radius.

use dispatch_core::{Address, MemoryAddressBook, PendingOrder, PickupPoint};
use geo::Coord;
use proptest::prelude::*;

/// Latitude of the pickup point used by every generated scenario.
pub const PICKUP_LAT: f64 = 55.789020;
/// Longitude of the pickup point used by every generated scenario.
pub const PICKUP_LON: f64 = 37.607210;

/// Pickup point shared by the property tests.
pub fn pickup() -> PickupPoint {
    PickupPoint::new(
        Coord {
            x: PICKUP_LON,
            y: PICKUP_LAT,
        },
        "Pickup",
    )
}

/// Address book resolving every key produced by [`order_set_strategy`].
pub fn address_book(orders: &[PendingOrder]) -> MemoryAddressBook {
    orders
        .iter()
        .map(|order| {
            (
                order.address_key.clone(),
                Address::new(order.location.y, order.location.x, order.address_key.clone()),
            )
        })
        .collect()
}

/// Strategy for an order set of `min_count..=max_count` orders.
///
/// Some orders share a site so the generator also exercises stop
/// deduplication.
pub fn order_set_strategy(
    min_count: usize,
    max_count: usize,
) -> impl Strategy<Value = Vec<PendingOrder>> {
    proptest::collection::vec(order_strategy(), min_count..=max_count)
}

fn order_strategy() -> impl Strategy<Value = PendingOrder> {
    let site = 0_u8..12_u8;
    let duration = 0_u32..=90_u32;
    let cooking = proptest::option::of(5_u32..=40_u32);
    (site, duration, cooking).prop_map(|(site, duration, cooking)| {
        let mut order = PendingOrder::new(format!("site-{site}"), site_location(site), duration);
        order.cooking_minutes = cooking;
        order
    })
}

/// Fixed positions on a loose grid around the pickup point.
#[expect(
    clippy::float_arithmetic,
    reason = "grid offsets are fractional degrees"
)]
fn site_location(site: u8) -> Coord<f64> {
    let row = f64::from(site.div_euclid(4));
    let column = f64::from(site.rem_euclid(4));
    Coord {
        x: PICKUP_LON + (column - 1.5) * 0.007,
        y: PICKUP_LAT + (row - 1.0) * 0.005,
    }
}
