//! Definition of the [`RouteRecord`] type.

use chrono::Duration;
use serde::Serialize;

use super::airport::Airport;
use super::location::Coordinate;
use super::unit::DistanceUnit;

/// The fully computed geometry of one origin/destination pair.
///
/// Records are built once by
/// [`RouteCalculator::compute_route`](crate::RouteCalculator::compute_route)
/// and never modified afterwards; consumers only format them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteRecord {
    /// Departure airport.
    pub origin: Airport,

    /// Arrival airport. Its location is always the destination's own,
    /// never a copy of the origin's.
    pub destination: Airport,

    /// Great-circle distance in statute miles.
    pub distance_miles: f64,
    /// Great-circle distance in kilometers.
    pub distance_km: f64,
    /// Great-circle distance in nautical miles.
    pub distance_nautical_miles: f64,

    /// Initial bearing in degrees, `[0, 360)`.
    pub bearing_degrees: f64,

    /// One of the 16 compass labels, derived from `bearing_degrees`.
    pub compass_direction: &'static str,

    /// Estimated flight time at the configured cruise speed.
    pub estimated_hours: f64,
}

impl RouteRecord {
    /// Location of the departure airport.
    pub fn origin_location(&self) -> &Coordinate {
        &self.origin.location
    }

    /// Location of the arrival airport.
    pub fn destination_location(&self) -> &Coordinate {
        &self.destination.location
    }

    /// The stored distance in the requested unit.
    pub fn distance(&self, unit: DistanceUnit) -> f64 {
        match unit {
            DistanceUnit::Miles => self.distance_miles,
            DistanceUnit::Kilometers => self.distance_km,
            DistanceUnit::NauticalMiles => self.distance_nautical_miles,
        }
    }

    /// Estimated flight time, to the millisecond.
    ///
    /// Negative or NaN hours give a zero duration; hours beyond what
    /// [`Duration`] can hold saturate.
    pub fn estimated_duration(&self) -> Duration {
        let millis = (self.estimated_hours * 3_600_000.0).round().max(0.0);
        // `as` saturates at i64::MAX, which is within Duration's range
        Duration::milliseconds(millis as i64)
    }

    /// Estimated flight time as whole hours and remaining whole minutes.
    pub fn hours_minutes(&self) -> (i64, i64) {
        let duration = self.estimated_duration();
        (duration.num_hours(), duration.num_minutes() % 60)
    }

    /// `"LAX → JFK"`
    pub fn label(&self) -> String {
        format!("{} → {}", self.origin.code, self.destination.code)
    }
}

#[cfg(test)]
mod route_tests {
    use super::*;

    fn record(hours: f64) -> RouteRecord {
        RouteRecord {
            origin: Airport::new("LAX", "Los Angeles", "Los Angeles", "USA", 33.9425, -118.4081)
                .unwrap(),
            destination: Airport::new("JFK", "New York", "New York", "USA", 40.6413, -73.7781)
                .unwrap(),
            distance_miles: 2475.0,
            distance_km: 3982.6,
            distance_nautical_miles: 2150.6,
            bearing_degrees: 65.9,
            compass_direction: "ENE",
            estimated_hours: hours,
        }
    }

    #[test]
    fn test_hours_minutes_truncates() {
        assert_eq!(record(4.95).hours_minutes(), (4, 57));
        assert_eq!(record(0.5).hours_minutes(), (0, 30));
        assert_eq!(record(2.0).hours_minutes(), (2, 0));
    }

    #[test]
    fn test_duration_out_of_range_does_not_panic() {
        assert_eq!(record(-9.87856).hours_minutes(), (0, 0));
        assert_eq!(record(f64::NAN).hours_minutes(), (0, 0));
        assert_eq!(record(f64::NEG_INFINITY).estimated_duration(), Duration::zero());

        let (hours, _) = record(f64::INFINITY).hours_minutes();
        assert!(hours > 0);
        let (hours, _) = record(1e300).hours_minutes();
        assert!(hours > 0);
    }

    #[test]
    fn test_distance_by_unit() {
        let r = record(4.95);
        assert_eq!(r.distance(DistanceUnit::Miles), 2475.0);
        assert_eq!(r.distance(DistanceUnit::Kilometers), 3982.6);
        assert_eq!(r.distance(DistanceUnit::NauticalMiles), 2150.6);
    }

    #[test]
    fn test_label() {
        assert_eq!(record(1.0).label(), "LAX → JFK");
    }
}
