//! Struct definitions and implementations for [`Airport`], the
//! endpoints of a route.
//!
//! An airport is identified by its code alone. Two airports with the
//! same code are the same location, whatever their coordinates say,
//! so identity checks never compare floating point values.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::CoordinateError;
use super::location::Coordinate;

/// An airport with its code and location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Airport {
    /// Upper-cased airport code (e.g. "LAX"). This is the stable
    /// identity key used for lookups and same-airport checks.
    pub code: String,

    /// Full airport name.
    pub name: String,
    /// City the airport serves.
    pub city: String,
    /// Country the airport is in.
    pub country: String,

    /// Denotes the geographical position of the airport.
    ///
    /// See also [`Coordinate`].
    pub location: Coordinate,
}

impl Airport {
    /// Creates a new airport. The code is trimmed and upper-cased.
    pub fn new(
        code: &str,
        name: &str,
        city: &str,
        country: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, CoordinateError> {
        Ok(Airport {
            code: normalize_code(code),
            name: name.trim().to_string(),
            city: city.trim().to_string(),
            country: country.trim().to_string(),
            location: Coordinate::new(latitude, longitude)?,
        })
    }

    /// Returns true when both airports share the same identity key.
    pub fn is_same_airport(&self, other: &Airport) -> bool {
        self.code.eq_ignore_ascii_case(&other.code)
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}, {}", self.code, self.city, self.country)
    }
}

/// Canonical form of an airport code.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}
