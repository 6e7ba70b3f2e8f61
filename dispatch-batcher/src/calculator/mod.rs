//! `DeliveryTimeCalculator`: the top-level dispatch simulation.

use dispatch_core::{
    AddressBook, AddressError, BatchSummary, DeliveryPlan, DispatchPolicy, Order, OrderDetail,
    PendingOrder, PickupPoint, PolicyError,
};
use geo::Coord;
use log::{debug, warn};
use thiserror::Error;

use crate::{Batcher, direct_route_minutes, third_party_call_minutes, timed_route};

/// Errors returned by [`DeliveryTimeCalculator::calculate_delivery_time`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculationError {
    /// An order referenced a key missing from the address book.
    #[error(transparent)]
    UnknownAddress(#[from] AddressError),
    /// Batches must be allowed to hold at least one order.
    #[error("max_deliveries must be at least 1")]
    ZeroCapacity,
}

/// Simulates how a dispatch platform batches, routes and times deliveries.
///
/// The calculator holds an immutable address book and a [`DispatchPolicy`];
/// every call is independent of previous ones.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use dispatch_core::{Address, MemoryAddressBook, PendingOrder, PickupPoint};
/// use dispatch_batcher::DeliveryTimeCalculator;
///
/// let book = MemoryAddressBook::new()
///     .with_address("home", Address::new(55.79088, 37.61095, "Москва, Ямская, 10"));
/// let calculator = DeliveryTimeCalculator::new(book);
/// let pickup = PickupPoint::new(Coord { x: 37.60721, y: 55.78902 }, "ПВ");
/// let orders = vec![PendingOrder::new("home", Coord { x: 37.61095, y: 55.79088 }, 15)];
///
/// let plan = calculator.calculate_delivery_time(&orders, &pickup, 3)?;
/// assert_eq!(plan.batches.len(), 1);
/// assert_eq!(plan.batches[0].order_ids, vec![1]);
/// # Ok::<(), dispatch_batcher::CalculationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DeliveryTimeCalculator<B: AddressBook> {
    address_book: B,
    policy: DispatchPolicy,
}

impl<B: AddressBook> DeliveryTimeCalculator<B> {
    /// Construct a calculator using the default policy.
    #[must_use]
    pub fn new(address_book: B) -> Self {
        Self {
            address_book,
            policy: DispatchPolicy::default(),
        }
    }

    /// Construct a calculator with an explicit policy.
    ///
    /// # Errors
    ///
    /// Returns a [`PolicyError`] when the policy fails validation.
    pub fn with_policy(address_book: B, policy: DispatchPolicy) -> Result<Self, PolicyError> {
        policy.validate()?;
        Ok(Self {
            address_book,
            policy,
        })
    }

    /// The address book used to resolve order addresses.
    #[must_use]
    pub const fn address_book(&self) -> &B {
        &self.address_book
    }

    /// The policy applied to every calculation.
    #[must_use]
    pub const fn policy(&self) -> &DispatchPolicy {
        &self.policy
    }

    /// Simulate with the policy's default batch cap.
    ///
    /// # Errors
    ///
    /// See [`DeliveryTimeCalculator::calculate_delivery_time`].
    pub fn plan(
        &self,
        orders: &[PendingOrder],
        pickup: &PickupPoint,
    ) -> Result<DeliveryPlan, CalculationError> {
        self.calculate_delivery_time(orders, pickup, self.policy.max_deliveries)
    }

    /// Group `orders` into batches of at most `max_deliveries`, route each
    /// batch from `pickup` and total the simulated time.
    ///
    /// Orders are numbered from 1 in input order before grouping. An empty
    /// order list yields an empty plan.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::ZeroCapacity`] when `max_deliveries` is
    /// zero, and [`CalculationError::UnknownAddress`] when an order's key is
    /// missing from the address book.
    pub fn calculate_delivery_time(
        &self,
        orders: &[PendingOrder],
        pickup: &PickupPoint,
        max_deliveries: usize,
    ) -> Result<DeliveryPlan, CalculationError> {
        if max_deliveries == 0 {
            return Err(CalculationError::ZeroCapacity);
        }
        warn_if_degenerate(&pickup.line1, pickup.location);

        let numbered = self.number_orders(orders)?;
        let batcher = Batcher::new(pickup, &self.policy, max_deliveries);
        let batches: Vec<BatchSummary> = batcher
            .group(&numbered)
            .iter()
            .map(|batch| self.summarise(batch, pickup))
            .collect();

        let plan = DeliveryPlan::from_batches(batches);
        debug!(
            "{} orders in {} batches, {:.2} min in total",
            plan.order_count(),
            plan.batches.len(),
            plan.total_minutes
        );
        Ok(plan)
    }

    /// Minutes after creation at which an order ready in `ready_in` minutes
    /// must be escalated to a third-party courier.
    #[must_use]
    pub fn third_party_call_minutes(&self, ready_in: u32, route_minutes: f64) -> f64 {
        third_party_call_minutes(ready_in, route_minutes, &self.policy)
    }

    /// Direct travel minutes from `pickup` to the address stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::UnknownAddress`] when `key` is missing from
    /// the address book.
    pub fn direct_route_minutes(
        &self,
        pickup: &PickupPoint,
        key: &str,
    ) -> Result<f64, CalculationError> {
        let address = self.address_book.resolve(key)?;
        Ok(direct_route_minutes(pickup, address.location(), &self.policy))
    }

    fn number_orders(&self, orders: &[PendingOrder]) -> Result<Vec<Order>, CalculationError> {
        (1_u64..)
            .zip(orders)
            .map(|(id, pending)| {
                let address = self.address_book.resolve(&pending.address_key)?;
                warn_if_degenerate(&pending.address_key, pending.location);
                Ok(Order::from_pending(id, pending, address.line1.clone()))
            })
            .collect()
    }

    fn summarise(&self, batch: &[Order], pickup: &PickupPoint) -> BatchSummary {
        let (batch_minutes, route) = timed_route(batch, pickup, &self.policy);
        BatchSummary {
            order_ids: batch.iter().map(|order| order.id).collect(),
            address_keys: batch.iter().map(|order| order.address_key.clone()).collect(),
            batch_minutes,
            route,
            details: batch.iter().map(OrderDetail::from).collect(),
        }
    }
}

fn warn_if_degenerate(label: &str, location: Coord<f64>) {
    if !location.x.is_finite() || !location.y.is_finite() {
        warn!("non-finite coordinates for {label}: {location:?}");
    }
}
