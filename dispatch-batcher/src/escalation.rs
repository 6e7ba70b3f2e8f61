//! When to hand an order to a third-party courier.

use dispatch_core::{DispatchPolicy, PickupPoint};
use geo::Coord;

/// Minutes after order creation at which a third-party courier must be
/// called so that the order is delivered within the third-party lateness
/// allowance.
///
/// A negative result means the call is already overdue.
///
/// # Examples
/// ```
/// use dispatch_core::DispatchPolicy;
/// use dispatch_batcher::third_party_call_minutes;
///
/// let policy = DispatchPolicy::default();
/// // 40 + 10 late - 15 arrival - 5 en route
/// assert_eq!(third_party_call_minutes(40, 5.0, &policy), 30.0);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "escalation moments are fractional minutes"
)]
#[must_use]
pub fn third_party_call_minutes(ready_in: u32, route_minutes: f64, policy: &DispatchPolicy) -> f64 {
    f64::from(ready_in) + policy.third_party_late_minutes
        - policy.third_party_arrival_minutes
        - route_minutes
}

/// Travel minutes of a direct leg from the pickup point to `destination`.
#[must_use]
pub fn direct_route_minutes(
    pickup: &PickupPoint,
    destination: Coord<f64>,
    policy: &DispatchPolicy,
) -> f64 {
    policy.leg_minutes(policy.distance_metres(pickup.location, destination))
}
