//! Orders and the pickup point they are collected from.

use geo::Coord;

use crate::Address;

/// An order submitted to the simulator, before sequence ids are assigned.
///
/// `duration_minutes` is the time until the order is ready for courier
/// pickup. `cooking_minutes` overrides the policy's default cooking time for
/// this order when set.
///
/// # Examples
/// ```
/// use dispatch_core::{Address, PendingOrder};
///
/// let address = Address::new(55.793728, 37.614428, "Москва, Сущёвский Вал, 55");
/// let order = PendingOrder::at_address("Сущёвский Вал 55", &address, 45)
///     .with_cooking_minutes(25);
/// assert_eq!(order.duration_minutes, 45);
/// assert_eq!(order.cooking_minutes, Some(25));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingOrder {
    /// Key into the address table.
    pub address_key: String,
    /// Delivery destination.
    pub location: Coord<f64>,
    /// Minutes until the order is ready.
    pub duration_minutes: u32,
    /// Per-order cooking time override, in minutes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cooking_minutes: Option<u32>,
}

impl PendingOrder {
    /// Construct a pending order with explicit coordinates.
    #[must_use]
    pub fn new(address_key: impl Into<String>, location: Coord<f64>, duration_minutes: u32) -> Self {
        Self {
            address_key: address_key.into(),
            location,
            duration_minutes,
            cooking_minutes: None,
        }
    }

    /// Construct a pending order delivered to a known address.
    #[must_use]
    pub fn at_address(
        address_key: impl Into<String>,
        address: &Address,
        duration_minutes: u32,
    ) -> Self {
        Self::new(address_key, address.location(), duration_minutes)
    }

    /// Set the per-order cooking time.
    #[must_use]
    pub const fn with_cooking_minutes(mut self, minutes: u32) -> Self {
        self.cooking_minutes = Some(minutes);
        self
    }
}

/// An order numbered for a single calculation run.
///
/// Ids are 1-based and follow input order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    /// Sequence id, unique within one run.
    pub id: u64,
    /// Key into the address table.
    pub address_key: String,
    /// Printable address line resolved from the address table.
    pub line1: String,
    /// Delivery destination.
    pub location: Coord<f64>,
    /// Minutes until the order is ready.
    pub duration_minutes: u32,
    /// Per-order cooking time override, in minutes.
    pub cooking_minutes: Option<u32>,
}

impl Order {
    /// Number a pending order and attach its resolved address line.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use dispatch_core::{Order, PendingOrder};
    ///
    /// let pending = PendingOrder::new("Ямская 10", Coord { x: 37.61095, y: 55.79088 }, 15);
    /// let order = Order::from_pending(3, &pending, "Москва, Ямская, 10");
    /// assert_eq!(order.id, 3);
    /// assert_eq!(order.line1, "Москва, Ямская, 10");
    /// ```
    #[must_use]
    pub fn from_pending(id: u64, pending: &PendingOrder, line1: impl Into<String>) -> Self {
        Self {
            id,
            address_key: pending.address_key.clone(),
            line1: line1.into(),
            location: pending.location,
            duration_minutes: pending.duration_minutes,
            cooking_minutes: pending.cooking_minutes,
        }
    }
}

/// The depot every simulated courier trip starts from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickupPoint {
    /// Depot position.
    pub location: Coord<f64>,
    /// Printable address line.
    pub line1: String,
}

impl PickupPoint {
    /// Construct a pickup point.
    #[must_use]
    pub fn new(location: Coord<f64>, line1: impl Into<String>) -> Self {
        Self {
            location,
            line1: line1.into(),
        }
    }

    /// Construct a pickup point at a known address.
    #[must_use]
    pub fn from_address(address: &Address) -> Self {
        Self::new(address.location(), address.line1.clone())
    }
}
