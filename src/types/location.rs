//! Struct definitions and implementations for [`Coordinate`].

use std::fmt;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use super::error::CoordinateError;

/// A [`Coordinate`] is a point on the Earth's surface in decimal
/// degrees. Typically, this type is used in tandem with the
/// [`Airport`](`super::airport::Airport`) type.
///
/// Latitude must lie in `[-90, 90]` and longitude in `[-180, 180]`.
/// [`Coordinate::new`] enforces the ranges. The geodesy functions take
/// a valid coordinate as a precondition and do not check it again.
///
/// Values are wrapped in [`OrderedFloat`] so that coordinates can be
/// compared and hashed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: OrderedFloat<f64>,
    pub longitude: OrderedFloat<f64>,
}

impl Coordinate {
    /// Creates a coordinate, rejecting out-of-range or non-finite values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        let coordinate = Coordinate {
            latitude: OrderedFloat(latitude),
            longitude: OrderedFloat(longitude),
        };
        coordinate.validate()?;
        Ok(coordinate)
    }

    /// Checks the latitude/longitude ranges.
    pub fn validate(&self) -> Result<(), CoordinateError> {
        let (lat, lon) = (self.lat(), self.lon());
        if !lat.is_finite() || !lon.is_finite() {
            return Err(CoordinateError::NotFinite);
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoordinateError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(CoordinateError::LongitudeOutOfRange(lon));
        }
        Ok(())
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.latitude.into_inner()
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.longitude.into_inner()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}°, {:.4}°", self.lat(), self.lon())
    }
}
