#![expect(
    clippy::expect_used,
    reason = "property tests use expect for readable failures"
)]

//! Property-based tests for the dispatch calculator.
//!
//! # Invariants tested
//!
//! - **Partition:** every order id appears in exactly one batch.
//! - **Capacity:** no batch holds more than `max_deliveries` orders.
//! - **Consolidation:** orders sharing a batch are pairwise within 1 km.
//! - **Time budget:** a batch formed by admission finishes within its
//!   latest-ready order plus the allowed lateness.
//! - **Totals:** the plan total is the sum of batch minutes.
//! - **Determinism:** identical inputs give identical plans.
#![expect(
    clippy::float_arithmetic,
    reason = "assertions compare floats within a tolerance"
)]

mod proptest_support;

use std::collections::BTreeSet;

use dispatch_batcher::DeliveryTimeCalculator;
use dispatch_core::{DeliveryPlan, DispatchPolicy, PendingOrder};
use proptest::prelude::*;

use proptest_support::{address_book, order_set_strategy, pickup};

fn plan(orders: &[PendingOrder], max_deliveries: usize) -> DeliveryPlan {
    DeliveryTimeCalculator::new(address_book(orders))
        .calculate_delivery_time(orders, &pickup(), max_deliveries)
        .expect("generated addresses are always known")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn every_order_lands_in_exactly_one_batch(
        orders in order_set_strategy(0, 12),
        max_deliveries in 1_usize..=4,
    ) {
        let plan = plan(&orders, max_deliveries);
        let ids: Vec<u64> = plan
            .batches
            .iter()
            .flat_map(|batch| batch.order_ids.iter().copied())
            .collect();
        let unique: BTreeSet<u64> = ids.iter().copied().collect();
        let expected: BTreeSet<u64> = (1..=orders.len() as u64).collect();

        prop_assert_eq!(ids.len(), orders.len());
        prop_assert_eq!(unique, expected);
        prop_assert!(plan.batches.iter().all(|batch| !batch.is_empty()));
    }

    #[test]
    fn batches_respect_capacity(
        orders in order_set_strategy(1, 12),
        max_deliveries in 1_usize..=4,
    ) {
        let plan = plan(&orders, max_deliveries);
        for batch in &plan.batches {
            prop_assert!(batch.len() <= max_deliveries, "batch {:?}", batch.order_ids);
        }
    }

    #[test]
    fn batch_members_are_pairwise_close(orders in order_set_strategy(2, 12)) {
        let policy = DispatchPolicy::default();
        let plan = plan(&orders, 3);
        for batch in &plan.batches {
            for a in &batch.details {
                for b in &batch.details {
                    let distance = policy.distance_metres(a.location, b.location);
                    prop_assert!(
                        distance <= policy.consolidation_radius_metres,
                        "orders {} and {} are {distance:.0} m apart",
                        a.id,
                        b.id
                    );
                }
            }
        }
    }

    #[test]
    fn admitted_batches_meet_the_time_budget(orders in order_set_strategy(2, 12)) {
        let policy = DispatchPolicy::default();
        let plan = plan(&orders, 3);
        for batch in plan.batches.iter().filter(|batch| batch.len() >= 2) {
            let latest = batch.max_duration_minutes().expect("batch has orders");
            let budget = f64::from(latest) + policy.late_minutes;
            prop_assert!(
                batch.batch_minutes <= budget + 1e-9,
                "batch {:?} takes {:.2} min, budget {budget:.2}",
                batch.order_ids,
                batch.batch_minutes
            );
        }
    }

    #[test]
    fn total_is_the_sum_of_batches(orders in order_set_strategy(0, 12)) {
        let plan = plan(&orders, 3);
        let sum: f64 = plan.batches.iter().map(|batch| batch.batch_minutes).sum();
        prop_assert!((plan.total_minutes - sum).abs() < 1e-9);
    }

    #[test]
    fn routes_start_at_the_pickup_point(orders in order_set_strategy(1, 12)) {
        let origin = pickup();
        let plan = plan(&orders, 3);
        for batch in &plan.batches {
            let first = batch.route.first().expect("non-empty batches have a route");
            prop_assert_eq!(first.from_location, origin.location);
            prop_assert!(batch.route.len() <= batch.len());
            for pair in batch.route.windows(2) {
                if let [previous, next] = pair {
                    prop_assert_eq!(previous.to_location, next.from_location);
                }
            }
        }
    }

    #[test]
    fn planning_is_deterministic(
        orders in order_set_strategy(0, 12),
        max_deliveries in 1_usize..=4,
    ) {
        prop_assert_eq!(plan(&orders, max_deliveries), plan(&orders, max_deliveries));
    }
}
