//! Great-circle distances on a spherical Earth.
//!
//! The dispatch model measures every hop with the haversine formula over a
//! sphere of radius [`EARTH_RADIUS_METRES`]. Inputs are WGS84 degrees in
//! `geo` order (`x = longitude`, `y = latitude`).

use geo::Coord;

/// Sphere radius used by the dispatch model, in metres.
pub const EARTH_RADIUS_METRES: f64 = 6_371_000.0;

/// Great-circle distance in metres between two coordinates.
///
/// Identical points yield exactly `0.0`; antipodal points yield half the
/// sphere's circumference.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use dispatch_core::haversine_distance;
///
/// let here = Coord { x: 37.614428, y: 55.793728 };
/// assert_eq!(haversine_distance(here, here), 0.0);
///
/// let north = Coord { x: 37.614428, y: 55.802728 };
/// let metres = haversine_distance(here, north);
/// assert!((metres - 1000.8).abs() < 1.0);
/// ```
#[must_use]
pub fn haversine_distance(from: Coord<f64>, to: Coord<f64>) -> f64 {
    haversine_distance_with_radius(from, to, EARTH_RADIUS_METRES)
}

/// Great-circle distance over a sphere of the given radius.
///
/// The result uses the same unit as `radius`.
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
#[must_use]
pub fn haversine_distance_with_radius(from: Coord<f64>, to: Coord<f64>, radius: f64) -> f64 {
    let lat1 = from.y.to_radians();
    let lat2 = to.y.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = to.x.to_radians() - from.x.to_radians();

    let half_chord = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push antipodal inputs a hair past 1.0.
    let half_chord = half_chord.clamp(0.0, 1.0);
    let central_angle = 2.0 * half_chord.sqrt().atan2((1.0 - half_chord).sqrt());

    radius * central_angle
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn coord(lat: f64, lon: f64) -> Coord<f64> {
        Coord { x: lon, y: lat }
    }

    #[rstest]
    #[case(coord(55.793728, 37.614428))]
    #[case(coord(0.0, 0.0))]
    #[case(coord(-89.9, 179.9))]
    fn identical_points_are_zero_apart(#[case] point: Coord<f64>) {
        assert_eq!(haversine_distance(point, point), 0.0);
    }

    #[rstest]
    fn one_degree_of_latitude_matches_arc_length() {
        let metres = haversine_distance(coord(0.0, 0.0), coord(1.0, 0.0));
        let expected = EARTH_RADIUS_METRES * 1.0_f64.to_radians();
        assert!((metres - expected).abs() < 1e-6, "got {metres}");
    }

    #[rstest]
    #[case(coord(0.0, 0.0), coord(0.0, 180.0))]
    #[case(coord(90.0, 0.0), coord(-90.0, 0.0))]
    #[case(coord(55.75, 37.62), coord(-55.75, -142.38))]
    fn antipodal_points_are_half_a_circumference_apart(
        #[case] from: Coord<f64>,
        #[case] to: Coord<f64>,
    ) {
        let metres = haversine_distance(from, to);
        let expected = std::f64::consts::PI * EARTH_RADIUS_METRES;
        assert!(metres.is_finite());
        assert!((metres - expected).abs() < 1.0, "got {metres}");
    }

    #[rstest]
    fn moscow_addresses_are_a_few_hundred_metres_apart() {
        let sushchevsky_val = coord(55.793728, 37.614428);
        let yamskaya = coord(55.790880, 37.610950);
        let metres = haversine_distance(sushchevsky_val, yamskaya);
        assert!((metres - 384.0).abs() < 1.0, "got {metres}");
    }

    #[rstest]
    fn custom_radius_scales_linearly() {
        let from = coord(10.0, 10.0);
        let to = coord(11.0, 12.0);
        let unit = haversine_distance_with_radius(from, to, 1.0);
        let earth = haversine_distance(from, to);
        assert!((unit * EARTH_RADIUS_METRES - earth).abs() < 1e-6);
    }
}
