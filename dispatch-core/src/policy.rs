//! Tunable constants of the dispatch time model.

use geo::Coord;
use thiserror::Error;

use crate::haversine_distance_with_radius;

/// Parameters of the batching and time-budget model.
///
/// Defaults reproduce the platform's documented dispatch settings: a 1 km
/// consolidation radius, 5 minutes at the pickup point, 20 minutes of cooking,
/// 5 minutes per hand-over, 10 minutes of allowed lateness and a courier
/// moving at 10 km/h.
///
/// # Examples
/// ```
/// use dispatch_core::DispatchPolicy;
///
/// let policy = DispatchPolicy::default();
/// assert_eq!(policy.max_deliveries, 3);
/// assert_eq!(policy.leg_minutes(0.0), 1.0);
/// assert_eq!(policy.leg_minutes(2_000.0), 12.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct DispatchPolicy {
    /// Sphere radius for distance calculations, in metres.
    pub earth_radius_metres: f64,
    /// Maximum pairwise distance between orders sharing a batch, in metres.
    pub consolidation_radius_metres: f64,
    /// Time spent collecting orders at the pickup point.
    pub pickup_minutes: f64,
    /// Cooking time applied to orders without an override.
    pub default_cooking_minutes: f64,
    /// Time spent handing each order to its customer.
    pub drop_off_minutes: f64,
    /// Allowed lateness on top of the latest-ready order.
    pub late_minutes: f64,
    /// Travel pace, in minutes per kilometre.
    pub minutes_per_km: f64,
    /// Lower bound for a single leg's travel time.
    pub min_leg_minutes: f64,
    /// Allowed lateness for third-party couriers.
    pub third_party_late_minutes: f64,
    /// Time a third-party courier needs to reach the pickup point.
    pub third_party_arrival_minutes: f64,
    /// Default cap on orders per batch.
    pub max_deliveries: usize,
}

impl Default for DispatchPolicy {
    fn default() -> Self {
        Self {
            earth_radius_metres: crate::EARTH_RADIUS_METRES,
            consolidation_radius_metres: 1_000.0,
            pickup_minutes: 5.0,
            default_cooking_minutes: 20.0,
            drop_off_minutes: 5.0,
            late_minutes: 10.0,
            minutes_per_km: 6.0,
            min_leg_minutes: 1.0,
            third_party_late_minutes: 10.0,
            third_party_arrival_minutes: 15.0,
            max_deliveries: 3,
        }
    }
}

/// Errors returned by [`DispatchPolicy::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// Batches must be allowed to hold at least one order.
    #[error("max_deliveries must be at least 1")]
    ZeroCapacity,
    /// A parameter was negative, NaN or infinite.
    #[error("{field} must be a finite, non-negative number")]
    InvalidParameter {
        /// Name of the offending field.
        field: &'static str,
    },
    /// A parameter that scales distances must be strictly positive.
    #[error("{field} must be strictly positive")]
    NonPositive {
        /// Name of the offending field.
        field: &'static str,
    },
}

impl DispatchPolicy {
    /// Check that every parameter is usable by the time model.
    ///
    /// # Errors
    ///
    /// Returns a [`PolicyError`] naming the first offending field.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.max_deliveries == 0 {
            return Err(PolicyError::ZeroCapacity);
        }
        let non_negative = [
            ("pickup_minutes", self.pickup_minutes),
            ("default_cooking_minutes", self.default_cooking_minutes),
            ("drop_off_minutes", self.drop_off_minutes),
            ("late_minutes", self.late_minutes),
            ("min_leg_minutes", self.min_leg_minutes),
            ("third_party_late_minutes", self.third_party_late_minutes),
            (
                "third_party_arrival_minutes",
                self.third_party_arrival_minutes,
            ),
            ("consolidation_radius_metres", self.consolidation_radius_metres),
        ];
        if let Some(&(field, _)) = non_negative
            .iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            return Err(PolicyError::InvalidParameter { field });
        }
        let positive = [
            ("earth_radius_metres", self.earth_radius_metres),
            ("minutes_per_km", self.minutes_per_km),
        ];
        if let Some(&(field, _)) = positive
            .iter()
            .find(|(_, value)| !value.is_finite() || *value <= 0.0)
        {
            return Err(PolicyError::NonPositive { field });
        }
        Ok(())
    }

    /// Great-circle distance between two points under this policy's radius.
    #[must_use]
    pub fn distance_metres(&self, from: Coord<f64>, to: Coord<f64>) -> f64 {
        haversine_distance_with_radius(from, to, self.earth_radius_metres)
    }

    /// Whether two points are close enough to share a batch.
    #[must_use]
    pub fn within_consolidation_radius(&self, from: Coord<f64>, to: Coord<f64>) -> bool {
        self.distance_metres(from, to) <= self.consolidation_radius_metres
    }

    /// Travel time for a leg of `distance_metres`, floored at
    /// [`min_leg_minutes`](Self::min_leg_minutes).
    #[expect(
        clippy::float_arithmetic,
        reason = "leg time is linear in a floating-point distance"
    )]
    #[must_use]
    pub fn leg_minutes(&self, distance_metres: f64) -> f64 {
        (distance_metres / 1_000.0 * self.minutes_per_km).max(self.min_leg_minutes)
    }
}
