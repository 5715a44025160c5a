//! Definition of the [`BatchSummary`] type.

use serde::Serialize;

use super::route::RouteRecord;
use super::unit::DistanceUnit;

/// Read-only statistics over a finalized, non-empty set of routes.
///
/// Built by [`summarize`](crate::summarize). Distance totals are kept in
/// miles; [`BatchSummary::total_distance`] converts through the stored
/// per-record values for other units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchSummary {
    /// Number of routes summarized.
    pub count: usize,
    /// Sum of route distances in miles.
    pub total_distance_miles: f64,
    /// Mean route distance in miles.
    pub average_distance_miles: f64,
    /// Sum of route distances in kilometers.
    pub total_distance_km: f64,
    /// Sum of route distances in nautical miles.
    pub total_distance_nautical_miles: f64,
    /// Sum of estimated flight times.
    pub total_hours: f64,
    /// Mean estimated flight time.
    pub average_hours: f64,
    /// First route with the smallest distance.
    pub shortest: RouteRecord,
    /// Last route with the largest distance.
    pub longest: RouteRecord,
}

impl BatchSummary {
    /// Total distance in the requested unit.
    pub fn total_distance(&self, unit: DistanceUnit) -> f64 {
        match unit {
            DistanceUnit::Miles => self.total_distance_miles,
            DistanceUnit::Kilometers => self.total_distance_km,
            DistanceUnit::NauticalMiles => self.total_distance_nautical_miles,
        }
    }

    /// Mean distance in the requested unit.
    pub fn average_distance(&self, unit: DistanceUnit) -> f64 {
        self.total_distance(unit) / self.count as f64
    }
}
