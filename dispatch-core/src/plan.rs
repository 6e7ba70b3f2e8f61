//! Output of a dispatch simulation: batches, routes and timings.

use geo::Coord;

use crate::Order;

/// A directed hop between two consecutive stops of a courier trip.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteLeg {
    /// Address line of the departure stop.
    pub from: String,
    /// Address line of the arrival stop.
    pub to: String,
    /// Departure position.
    pub from_location: Coord<f64>,
    /// Arrival position.
    pub to_location: Coord<f64>,
    /// Great-circle distance in metres.
    pub distance_metres: f64,
    /// Travel time in minutes.
    pub minutes: f64,
}

/// Per-order detail reported for a batch.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderDetail {
    /// Sequence id assigned for this run.
    pub id: u64,
    /// Key into the address table.
    pub address_key: String,
    /// Minutes until the order is ready.
    pub duration_minutes: u32,
    /// Delivery destination.
    pub location: Coord<f64>,
}

impl From<&Order> for OrderDetail {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            address_key: order.address_key.clone(),
            duration_minutes: order.duration_minutes,
            location: order.location,
        }
    }
}

/// One simulated courier trip.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchSummary {
    /// Ids of the orders in the batch, in admission order.
    pub order_ids: Vec<u64>,
    /// Address keys of the orders, in admission order.
    pub address_keys: Vec<String>,
    /// Total simulated minutes to complete the batch.
    pub batch_minutes: f64,
    /// Legs from the pickup point through every distinct stop.
    pub route: Vec<RouteLeg>,
    /// Per-order detail.
    pub details: Vec<OrderDetail>,
}

impl BatchSummary {
    /// Number of orders in the batch.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.order_ids.len()
    }

    /// Whether the batch holds no orders.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.order_ids.is_empty()
    }

    /// Whether the batch contains the order with `id`.
    #[must_use]
    pub fn contains(&self, id: u64) -> bool {
        self.order_ids.contains(&id)
    }

    /// Sum of leg travel times.
    #[must_use]
    pub fn movement_minutes(&self) -> f64 {
        self.route.iter().map(|leg| leg.minutes).sum()
    }

    /// Latest readiness among the batch's orders.
    #[must_use]
    pub fn max_duration_minutes(&self) -> Option<u32> {
        self.details.iter().map(|detail| detail.duration_minutes).max()
    }
}

/// Result of a dispatch simulation.
///
/// # Examples
/// ```
/// use dispatch_core::DeliveryPlan;
///
/// let plan = DeliveryPlan::empty();
/// assert_eq!(plan.total_minutes, 0.0);
/// assert_eq!(plan.order_count(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeliveryPlan {
    /// Sum of every batch's minutes.
    pub total_minutes: f64,
    /// Batches in the order they were formed.
    pub batches: Vec<BatchSummary>,
}

impl DeliveryPlan {
    /// A plan with no batches.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            total_minutes: 0.0,
            batches: Vec::new(),
        }
    }

    /// Build a plan from batches, summing their minutes.
    #[must_use]
    pub fn from_batches(batches: Vec<BatchSummary>) -> Self {
        let total_minutes = batches.iter().map(|batch| batch.batch_minutes).sum();
        Self {
            total_minutes,
            batches,
        }
    }

    /// Number of orders across all batches.
    #[must_use]
    pub fn order_count(&self) -> usize {
        self.batches.iter().map(BatchSummary::len).sum()
    }

    /// The batch containing the order with `id`, if any.
    #[must_use]
    pub fn batch_of(&self, id: u64) -> Option<&BatchSummary> {
        self.batches.iter().find(|batch| batch.contains(id))
    }
}

#[cfg(test)]
#[expect(
    clippy::float_arithmetic,
    reason = "assertions compare floats within a tolerance"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn batch(ids: &[u64], minutes: f64) -> BatchSummary {
        BatchSummary {
            order_ids: ids.to_vec(),
            address_keys: ids.iter().map(|id| format!("key-{id}")).collect(),
            batch_minutes: minutes,
            route: Vec::new(),
            details: Vec::new(),
        }
    }

    #[rstest]
    fn plan_totals_batch_minutes() {
        let plan = DeliveryPlan::from_batches(vec![batch(&[1, 2], 30.5), batch(&[3], 12.0)]);
        assert!((plan.total_minutes - 42.5).abs() < 1e-9);
        assert_eq!(plan.order_count(), 3);
    }

    #[rstest]
    fn batch_lookup_finds_owner() {
        let plan = DeliveryPlan::from_batches(vec![batch(&[1, 2], 30.0), batch(&[3], 12.0)]);
        assert_eq!(plan.batch_of(3).map(|b| b.order_ids.clone()), Some(vec![3]));
        assert!(plan.batch_of(4).is_none());
    }
}
