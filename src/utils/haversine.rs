//! Great-circle geometry on a spherical Earth.
//!
//! All functions are pure. Coordinates are expected to be in range
//! (see [`Coordinate::new`]); nothing here validates them.

use crate::types::location::Coordinate;
use crate::types::unit::DistanceUnit;

/// Rounds `value` to `places` decimal places, half away from zero.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Calculates the great-circle distance between two coordinates with
/// the Haversine formula.
///
/// # Arguments
/// * `origin` - Starting point.
/// * `destination` - End point.
/// * `unit` - Selects the Earth radius the central angle is scaled by.
///
/// # Returns
/// The distance in `unit`, rounded to 2 decimal places. Identical
/// coordinates yield exactly `0.0`.
pub fn distance(origin: &Coordinate, destination: &Coordinate, unit: DistanceUnit) -> f64 {
    let lat1 = origin.lat().to_radians();
    let lat2 = destination.lat().to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (destination.lon() - origin.lon()).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // rounding can push antipodal points a hair past 1
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    round_to(unit.earth_radius() * c, 2)
}

/// Calculates the initial bearing (forward azimuth) from `origin`
/// towards `destination`, clockwise from true north.
///
/// # Returns
/// Degrees in `[0, 360)`, rounded to 1 decimal place.
///
/// When both points are the same there is no direction to speak of:
/// `atan2(0, 0)` evaluates to `0` and the bearing is reported as `0.0`.
/// The value is defined but meaningless and is not treated as an error.
pub fn initial_bearing(origin: &Coordinate, destination: &Coordinate) -> f64 {
    let lat1 = origin.lat().to_radians();
    let lat2 = destination.lat().to_radians();
    let d_lon = (destination.lon() - origin.lon()).to_radians();

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    let bearing = (y.atan2(x).to_degrees() + 360.0) % 360.0;
    let bearing = round_to(bearing, 1);
    // 359.96 rounds up to 360.0, which is north again
    if bearing >= 360.0 {
        0.0
    } else {
        bearing
    }
}

#[cfg(test)]
mod haversine_tests {
    use super::*;
    use crate::utils::generator::generate_coordinates;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    /// Known distance: approximately 2,475 miles.
    #[test]
    fn test_lax_to_jfk() {
        let lax = coord(33.9425, -118.4081);
        let jfk = coord(40.6413, -73.7781);

        let miles = distance(&lax, &jfk, DistanceUnit::Miles);
        assert!(miles > 2465.0 && miles < 2485.0, "got {}", miles);
        assert!(miles > 2400.0 && miles < 2600.0);

        let bearing = initial_bearing(&lax, &jfk);
        assert!(bearing > 60.0 && bearing < 80.0, "got {}", bearing);
    }

    #[test]
    fn test_same_point_is_zero_in_every_unit() {
        for c in generate_coordinates(50) {
            for unit in DistanceUnit::ALL {
                assert_eq!(distance(&c, &c, unit), 0.0);
            }
        }
    }

    #[test]
    fn test_symmetry() {
        let points = generate_coordinates(40);
        for pair in points.windows(2) {
            for unit in DistanceUnit::ALL {
                let there = distance(&pair[0], &pair[1], unit);
                let back = distance(&pair[1], &pair[0], unit);
                assert!((there - back).abs() < 1e-9, "{} != {}", there, back);
                assert!(there >= 0.0);
            }
        }
    }

    #[test]
    fn test_monotonic_in_separation() {
        let origin = coord(0.0, 0.0);
        let mut previous = 0.0;
        for lon in (1..=180).map(f64::from) {
            let current = distance(&origin, &coord(0.0, lon), DistanceUnit::Kilometers);
            assert!(current > previous, "{} <= {} at lon {}", current, previous, lon);
            previous = current;
        }
    }

    #[test]
    fn test_unit_ratio() {
        let expected = 6371.0 / 3959.0;
        let points = generate_coordinates(40);
        for pair in points.windows(2) {
            let miles = distance(&pair[0], &pair[1], DistanceUnit::Miles);
            if miles < 100.0 {
                continue;
            }
            let km = distance(&pair[0], &pair[1], DistanceUnit::Kilometers);
            assert!((km / miles - expected).abs() < 1e-3);
        }
    }

    #[test]
    fn test_antipodes_do_not_produce_nan() {
        let d = distance(&coord(0.0, 0.0), &coord(0.0, 180.0), DistanceUnit::Kilometers);
        assert!(d.is_finite());
        assert!((d - std::f64::consts::PI * 6371.0).abs() < 0.01);
    }

    #[test]
    fn test_bearing_north() {
        let bearing = initial_bearing(&coord(0.0, 0.0), &coord(90.0, 0.0));
        assert!((bearing - 0.0).abs() < 0.1);
    }

    #[test]
    fn test_bearing_east() {
        let bearing = initial_bearing(&coord(0.0, 0.0), &coord(0.0, 10.0));
        assert!((bearing - 90.0).abs() < 0.1);
    }

    #[test]
    fn test_bearing_south_and_west() {
        let bearing = initial_bearing(&coord(10.0, 0.0), &coord(0.0, 0.0));
        assert!((bearing - 180.0).abs() < 0.1);
        let bearing = initial_bearing(&coord(0.0, 10.0), &coord(0.0, 0.0));
        assert!((bearing - 270.0).abs() < 0.1);
    }

    #[test]
    fn test_bearing_same_point_is_zero() {
        let c = coord(40.0, -75.0);
        assert_eq!(initial_bearing(&c, &c), 0.0);
    }

    #[test]
    fn test_bearing_stays_below_360() {
        for pair in generate_coordinates(100).windows(2) {
            let bearing = initial_bearing(&pair[0], &pair[1]);
            assert!((0.0..360.0).contains(&bearing), "got {}", bearing);
        }
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(2475.456, 2), 2475.46);
        assert_eq!(round_to(65.94, 1), 65.9);
        assert_eq!(round_to(0.0, 2), 0.0);
    }
}
