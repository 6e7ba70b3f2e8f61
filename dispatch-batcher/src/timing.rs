//! Simulated time to complete one courier batch.

use dispatch_core::{DispatchPolicy, Order, PickupPoint, RouteLeg};

use crate::optimise_route;

/// Total simulated minutes for a batch.
///
/// The time is the pickup allowance, plus the longest cooking time in the
/// batch, plus travel along [`optimise_route`], plus one drop-off allowance
/// per order. An empty batch takes no time.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use dispatch_core::{DispatchPolicy, Order, PendingOrder, PickupPoint};
/// use dispatch_batcher::batch_minutes;
///
/// let pickup = PickupPoint::new(Coord { x: 37.6, y: 55.7 }, "ПВ");
/// let pending = PendingOrder::new("here", Coord { x: 37.6, y: 55.7 }, 30);
/// let batch = vec![Order::from_pending(1, &pending, "Here")];
///
/// // 5 pickup + 20 cooking + 1 minimum leg + 5 drop-off
/// assert_eq!(batch_minutes(&batch, &pickup, &DispatchPolicy::default()), 31.0);
/// ```
#[must_use]
pub fn batch_minutes(batch: &[Order], pickup: &PickupPoint, policy: &DispatchPolicy) -> f64 {
    timed_route(batch, pickup, policy).0
}

/// Batch minutes together with the route they were computed from.
#[expect(
    clippy::float_arithmetic,
    reason = "the time model sums fractional minutes"
)]
#[must_use]
pub fn timed_route(
    batch: &[Order],
    pickup: &PickupPoint,
    policy: &DispatchPolicy,
) -> (f64, Vec<RouteLeg>) {
    if batch.is_empty() {
        return (0.0, Vec::new());
    }

    let cooking = batch
        .iter()
        .map(|order| {
            order
                .cooking_minutes
                .map_or(policy.default_cooking_minutes, f64::from)
        })
        .fold(0.0_f64, f64::max);
    let route = optimise_route(batch, pickup, policy);
    let movement: f64 = route.iter().map(|leg| leg.minutes).sum();
    let drop_off = policy.drop_off_minutes * order_count(batch.len());

    (policy.pickup_minutes + cooking + movement + drop_off, route)
}

#[expect(
    clippy::cast_precision_loss,
    reason = "batch sizes are far below f64's exact integer range"
)]
const fn order_count(len: usize) -> f64 {
    len as f64
}
