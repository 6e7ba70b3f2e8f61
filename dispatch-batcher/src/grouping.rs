//! Greedy, readiness-first grouping of orders into courier batches.

use std::collections::BTreeSet;

use dispatch_core::{DispatchPolicy, Order, PickupPoint};
use log::debug;

use crate::batch_minutes;

/// Partitions orders into batches for one pickup point.
///
/// Orders are visited earliest-ready first. Each unconsumed order seeds a new
/// batch, which then greedily admits later candidates that pass
/// [`Batcher::admits`]. Batches are closed as soon as the scan finishes and
/// never revisited.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use dispatch_core::{DispatchPolicy, Order, PendingOrder, PickupPoint};
/// use dispatch_batcher::Batcher;
///
/// let pickup = PickupPoint::new(Coord { x: 37.6, y: 55.7 }, "ПВ");
/// let policy = DispatchPolicy::default();
/// let orders: Vec<Order> = (1..=4)
///     .map(|id| {
///         let pending = PendingOrder::new("here", Coord { x: 37.6, y: 55.7 }, 60);
///         Order::from_pending(id, &pending, "Here")
///     })
///     .collect();
///
/// let batches = Batcher::new(&pickup, &policy, 3).group(&orders);
/// assert_eq!(batches.len(), 2);
/// assert_eq!(batches[0].len(), 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Batcher<'a> {
    pickup: &'a PickupPoint,
    policy: &'a DispatchPolicy,
    max_deliveries: usize,
}

impl<'a> Batcher<'a> {
    /// Construct a batcher with an explicit per-batch cap.
    #[must_use]
    pub const fn new(
        pickup: &'a PickupPoint,
        policy: &'a DispatchPolicy,
        max_deliveries: usize,
    ) -> Self {
        Self {
            pickup,
            policy,
            max_deliveries,
        }
    }

    /// Partition `orders` into batches.
    ///
    /// Every order appears in exactly one batch. Ties in readiness keep
    /// input order.
    #[must_use]
    pub fn group(&self, orders: &[Order]) -> Vec<Vec<Order>> {
        let mut by_readiness: Vec<&Order> = orders.iter().collect();
        by_readiness.sort_by_key(|order| order.duration_minutes);

        let mut consumed = BTreeSet::new();
        let mut batches = Vec::new();

        for (seed_index, seed) in by_readiness.iter().enumerate() {
            if !consumed.insert(seed_index) {
                continue;
            }
            let mut batch = vec![(*seed).clone()];

            for (candidate_index, candidate) in by_readiness.iter().enumerate() {
                if consumed.contains(&candidate_index) {
                    continue;
                }
                if self.admits(&batch, candidate) {
                    debug!(
                        "order {} joins batch seeded by order {}",
                        candidate.id, seed.id
                    );
                    batch.push((*candidate).clone());
                    consumed.insert(candidate_index);
                }
            }

            debug!(
                "closed batch {:?}",
                batch.iter().map(|order| order.id).collect::<Vec<_>>()
            );
            batches.push(batch);
        }

        batches
    }

    /// Whether `candidate` may join `batch`.
    ///
    /// A candidate is rejected when the batch is full, when it lies outside
    /// the consolidation radius of any order already in the batch, or when
    /// the enlarged batch would take longer than its latest-ready order's
    /// readiness plus the allowed lateness.
    #[must_use]
    pub fn admits(&self, batch: &[Order], candidate: &Order) -> bool {
        if batch.len() >= self.max_deliveries {
            return false;
        }
        if !batch.iter().all(|member| {
            self.policy
                .within_consolidation_radius(member.location, candidate.location)
        }) {
            return false;
        }

        let mut trial = batch.to_vec();
        trial.push(candidate.clone());
        let latest_ready = trial
            .iter()
            .map(|order| order.duration_minutes)
            .max()
            .unwrap_or(candidate.duration_minutes);

        self.within_budget(batch_minutes(&trial, self.pickup, self.policy), latest_ready)
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "the lateness budget is compared in fractional minutes"
    )]
    fn within_budget(&self, minutes: f64, latest_ready: u32) -> bool {
        let allowed = f64::from(latest_ready) + self.policy.late_minutes;
        if minutes > allowed {
            debug!("batch needs {minutes:.2} min, budget is {allowed:.2} min");
            return false;
        }
        true
    }
}
