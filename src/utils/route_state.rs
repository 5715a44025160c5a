//! Builds route records from airports and folds batches of them.

use serde::{Deserialize, Serialize};

use crate::algorithms::aggregate::summarize;
use crate::types::airport::Airport;
use crate::types::error::{ConfigError, RouteError, SummaryError};
use crate::types::route::RouteRecord;
use crate::types::summary::BatchSummary;
use crate::types::unit::DistanceUnit;
use crate::utils::airport_table::AirportTable;
use crate::utils::compass::compass_label;
use crate::utils::haversine;

/// Assumed average commercial cruise speed, in miles per hour.
pub const DEFAULT_CRUISE_SPEED_MPH: f64 = 500.0;

/// Demo batch of well-known long-haul routes.
pub const POPULAR_ROUTES: [(&str, &str); 6] = [
    ("LAX", "JFK"), // US transcontinental
    ("LHR", "JFK"), // transatlantic
    ("NRT", "LAX"), // transpacific
    ("SYD", "LAX"),
    ("DXB", "LHR"),
    ("CDG", "JFK"),
];

/// Settings for turning distances into flight time estimates.
///
/// Deserializing goes through [`RouteConfig::new`], so a config file
/// with a bad speed is rejected rather than loaded.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRouteConfig")]
pub struct RouteConfig {
    /// Ground speed, in `speed_unit` per hour.
    pub cruise_speed: f64,

    /// Unit `cruise_speed` is expressed in. The matching distance of
    /// each route is divided by the speed.
    pub speed_unit: DistanceUnit,
}

impl RouteConfig {
    /// Creates a config, rejecting non-finite or non-positive speeds.
    pub fn new(cruise_speed: f64, speed_unit: DistanceUnit) -> Result<Self, ConfigError> {
        let config = RouteConfig {
            cruise_speed,
            speed_unit,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.cruise_speed.is_finite() || self.cruise_speed <= 0.0 {
            return Err(ConfigError::InvalidCruiseSpeed(self.cruise_speed));
        }
        Ok(())
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        RouteConfig {
            cruise_speed: DEFAULT_CRUISE_SPEED_MPH,
            speed_unit: DistanceUnit::Miles,
        }
    }
}

/// Unchecked shape of a [`RouteConfig`] as read from a config file.
/// Missing fields fall back to the defaults.
#[derive(Deserialize)]
#[serde(default)]
struct RawRouteConfig {
    cruise_speed: f64,
    speed_unit: DistanceUnit,
}

impl Default for RawRouteConfig {
    fn default() -> Self {
        let RouteConfig {
            cruise_speed,
            speed_unit,
        } = RouteConfig::default();
        RawRouteConfig {
            cruise_speed,
            speed_unit,
        }
    }
}

impl TryFrom<RawRouteConfig> for RouteConfig {
    type Error = ConfigError;

    fn try_from(raw: RawRouteConfig) -> Result<Self, Self::Error> {
        RouteConfig::new(raw.cruise_speed, raw.speed_unit)
    }
}

/// Estimates flight time in hours from a distance given in the
/// config's speed unit.
pub fn estimate_flight_hours(distance: f64, config: &RouteConfig) -> f64 {
    distance / config.cruise_speed
}

/// A pair that was left out of a batch, and why.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRoute {
    pub origin: String,
    pub destination: String,
    pub reason: RouteError,
}

/// Result of running a list of code pairs through a [`RouteCalculator`].
#[derive(Debug, Clone, Default)]
pub struct BatchAnalysis {
    /// Successfully computed routes, in input order.
    pub records: Vec<RouteRecord>,

    /// Pairs that failed, in input order.
    pub skipped: Vec<SkippedRoute>,
}

impl BatchAnalysis {
    /// Folds the computed routes into a [`BatchSummary`].
    pub fn summary(&self) -> Result<BatchSummary, SummaryError> {
        summarize(&self.records)
    }
}

/// Computes route records with a fixed [`RouteConfig`].
///
/// The calculator holds no mutable state; one instance can be shared
/// freely between threads.
#[derive(Debug, Clone, Default)]
pub struct RouteCalculator {
    config: RouteConfig,
}

impl RouteCalculator {
    /// Creates a calculator, re-checking `config` since its fields are
    /// public and may have been set directly.
    pub fn new(config: RouteConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(RouteCalculator { config })
    }

    pub fn config(&self) -> &RouteConfig {
        &self.config
    }

    /// Computes the full geometry between two airports.
    ///
    /// # Arguments
    /// * `origin` - Departure airport.
    /// * `destination` - Arrival airport.
    ///
    /// # Returns
    /// A [`RouteRecord`] with distances in all units, initial bearing,
    /// compass label and estimated duration.
    ///
    /// Fails with [`RouteError::SameAirport`] when both airports share a
    /// code, and with [`RouteError::InvalidCoordinate`] when either
    /// location is out of range.
    pub fn compute_route(
        &self,
        origin: &Airport,
        destination: &Airport,
    ) -> Result<RouteRecord, RouteError> {
        debug!("origin: {:?}", origin);
        debug!("destination: {:?}", destination);
        if origin.is_same_airport(destination) {
            return Err(RouteError::SameAirport(origin.code.clone()));
        }
        for airport in [origin, destination] {
            airport
                .location
                .validate()
                .map_err(|source| RouteError::InvalidCoordinate {
                    code: airport.code.clone(),
                    source,
                })?;
        }

        let from = &origin.location;
        let to = &destination.location;
        let distance_miles = haversine::distance(from, to, DistanceUnit::Miles);
        let distance_km = haversine::distance(from, to, DistanceUnit::Kilometers);
        let distance_nautical_miles = haversine::distance(from, to, DistanceUnit::NauticalMiles);
        let bearing_degrees = haversine::initial_bearing(from, to);

        let mut record = RouteRecord {
            origin: origin.clone(),
            destination: destination.clone(),
            distance_miles,
            distance_km,
            distance_nautical_miles,
            bearing_degrees,
            compass_direction: compass_label(bearing_degrees),
            estimated_hours: 0.0,
        };
        record.estimated_hours =
            estimate_flight_hours(record.distance(self.config.speed_unit), &self.config);
        debug!("route: {:?}", record);
        Ok(record)
    }

    /// Resolves both codes in `airports`, then computes the route.
    pub fn compute_route_by_code(
        &self,
        airports: &AirportTable,
        origin: &str,
        destination: &str,
    ) -> Result<RouteRecord, RouteError> {
        let origin = airports.lookup(origin)?;
        let destination = airports.lookup(destination)?;
        self.compute_route(origin, destination)
    }

    /// Computes every pair, skipping the ones that fail.
    ///
    /// A failing pair is logged and recorded in
    /// [`BatchAnalysis::skipped`]; it never stops the batch.
    pub fn analyze_batch<S: AsRef<str>>(
        &self,
        airports: &AirportTable,
        pairs: &[(S, S)],
    ) -> BatchAnalysis {
        info!("Analyzing {} routes", pairs.len());
        let mut analysis = BatchAnalysis::default();
        for (i, (origin, destination)) in pairs.iter().enumerate() {
            let (origin, destination) = (origin.as_ref(), destination.as_ref());
            info!(
                "[{}/{}]: {} → {}",
                i + 1,
                pairs.len(),
                origin,
                destination
            );
            match self.compute_route_by_code(airports, origin, destination) {
                Ok(record) => analysis.records.push(record),
                Err(reason) => {
                    warn!("Skipping route {} → {}: {}", origin, destination, reason);
                    analysis.skipped.push(SkippedRoute {
                        origin: origin.to_string(),
                        destination: destination.to_string(),
                        reason,
                    });
                }
            }
        }
        info!(
            "Finished batch: {} computed, {} skipped",
            analysis.records.len(),
            analysis.skipped.len()
        );
        analysis
    }
}
