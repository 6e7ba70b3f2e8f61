//! Nearest-neighbour sequencing of a batch's stops.

use dispatch_core::{DispatchPolicy, Order, PickupPoint, RouteLeg};
use geo::Coord;

/// A distinct place the courier must visit.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Stop<'a> {
    location: Coord<f64>,
    line1: &'a str,
}

/// Sequence a batch's stops starting from the pickup point.
///
/// Orders sharing both coordinates and address line collapse into one stop.
/// From the current position the nearest unvisited stop is taken next; ties
/// go to the stop met first in batch order. No return leg to the pickup point
/// is added.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use dispatch_core::{DispatchPolicy, Order, PendingOrder, PickupPoint};
/// use dispatch_batcher::optimise_route;
///
/// let pickup = PickupPoint::new(Coord { x: 37.60721, y: 55.78902 }, "ПВ");
/// let far = PendingOrder::new("far", Coord { x: 37.614428, y: 55.793728 }, 30);
/// let near = PendingOrder::new("near", Coord { x: 37.61095, y: 55.79088 }, 30);
/// let batch = vec![
///     Order::from_pending(1, &far, "Far"),
///     Order::from_pending(2, &near, "Near"),
/// ];
///
/// let route = optimise_route(&batch, &pickup, &DispatchPolicy::default());
/// assert_eq!(route.len(), 2);
/// assert_eq!(route[0].from, "ПВ");
/// assert_eq!(route[0].to, "Near");
/// assert_eq!(route[1].to, "Far");
/// ```
#[must_use]
pub fn optimise_route(
    batch: &[Order],
    pickup: &PickupPoint,
    policy: &DispatchPolicy,
) -> Vec<RouteLeg> {
    let mut remaining = distinct_stops(batch);
    let mut legs = Vec::with_capacity(remaining.len());
    let mut current = Stop {
        location: pickup.location,
        line1: &pickup.line1,
    };

    while let Some(index) = nearest_stop(&remaining, current.location, policy) {
        let next = remaining.remove(index);
        let distance_metres = policy.distance_metres(current.location, next.location);
        legs.push(RouteLeg {
            from: current.line1.to_owned(),
            to: next.line1.to_owned(),
            from_location: current.location,
            to_location: next.location,
            distance_metres,
            minutes: policy.leg_minutes(distance_metres),
        });
        current = next;
    }

    legs
}

fn distinct_stops(batch: &[Order]) -> Vec<Stop<'_>> {
    let mut stops: Vec<Stop<'_>> = Vec::with_capacity(batch.len());
    for order in batch {
        let stop = Stop {
            location: order.location,
            line1: &order.line1,
        };
        if !stops.contains(&stop) {
            stops.push(stop);
        }
    }
    stops
}

fn nearest_stop(stops: &[Stop<'_>], from: Coord<f64>, policy: &DispatchPolicy) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, stop) in stops.iter().enumerate() {
        let distance = policy.distance_metres(from, stop.location);
        if best.is_none_or(|(_, closest)| distance < closest) {
            best = Some((index, distance));
        }
    }
    best.map(|(index, _)| index)
}

#[cfg(test)]
#[expect(
    clippy::float_arithmetic,
    reason = "assertions compare floats within a tolerance"
)]
mod tests {
    use super::*;
    use dispatch_core::PendingOrder;
    use rstest::{fixture, rstest};

    fn order(id: u64, lat: f64, lon: f64, line1: &str) -> Order {
        let pending = PendingOrder::new(line1, Coord { x: lon, y: lat }, 30);
        Order::from_pending(id, &pending, line1)
    }

    #[fixture]
    fn pickup() -> PickupPoint {
        PickupPoint::new(Coord { x: 37.607210, y: 55.789020 }, "Pickup")
    }

    #[rstest]
    fn empty_batch_has_no_legs(pickup: PickupPoint) {
        assert!(optimise_route(&[], &pickup, &DispatchPolicy::default()).is_empty());
    }

    #[rstest]
    fn colocated_orders_collapse_into_one_stop(pickup: PickupPoint) {
        let batch = vec![
            order(1, 55.793728, 37.614428, "Val"),
            order(2, 55.793728, 37.614428, "Val"),
        ];
        let route = optimise_route(&batch, &pickup, &DispatchPolicy::default());
        assert_eq!(route.len(), 1);
        assert_eq!(route[0].to, "Val");
    }

    #[rstest]
    fn same_coordinates_with_different_lines_stay_distinct(pickup: PickupPoint) {
        let batch = vec![
            order(1, 55.793728, 37.614428, "Entrance 1"),
            order(2, 55.793728, 37.614428, "Entrance 2"),
        ];
        let route = optimise_route(&batch, &pickup, &DispatchPolicy::default());
        assert_eq!(route.len(), 2);
        assert_eq!(route[1].distance_metres, 0.0);
        assert_eq!(route[1].minutes, 1.0);
    }

    #[rstest]
    fn legs_chain_from_the_pickup_point(pickup: PickupPoint) {
        let batch = vec![
            order(1, 55.793728, 37.614428, "Val"),
            order(2, 55.790880, 37.610950, "Yamskaya"),
        ];
        let route = optimise_route(&batch, &pickup, &DispatchPolicy::default());
        let hops: Vec<(&str, &str)> = route
            .iter()
            .map(|leg| (leg.from.as_str(), leg.to.as_str()))
            .collect();
        assert_eq!(hops, vec![("Pickup", "Yamskaya"), ("Yamskaya", "Val")]);
        assert_eq!(route[0].from_location, pickup.location);
        assert_eq!(route[1].from_location, route[0].to_location);
    }

    #[rstest]
    fn leg_minutes_follow_distance(pickup: PickupPoint) {
        let batch = vec![order(1, 55.790880, 37.610950, "Yamskaya")];
        let route = optimise_route(&batch, &pickup, &DispatchPolicy::default());
        let leg = &route[0];
        assert!((leg.distance_metres - 312.0).abs() < 1.0, "{}", leg.distance_metres);
        assert!((leg.minutes - leg.distance_metres / 1000.0 * 6.0).abs() < 1e-9);
    }

    #[rstest]
    fn ties_go_to_the_first_stop_in_batch_order() {
        let pickup = PickupPoint::new(Coord { x: 0.0, y: 0.0 }, "Origin");
        let batch = vec![order(1, 0.0, 0.001, "East"), order(2, 0.0, -0.001, "West")];
        let route = optimise_route(&batch, &pickup, &DispatchPolicy::default());
        assert_eq!(route[0].to, "East");
        assert_eq!(route[1].to, "West");
    }
}
