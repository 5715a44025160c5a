//! Definition for the [`DistanceUnit`] type, implemented by an enum.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Mean Earth radius in statute miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;
/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;
/// Mean Earth radius in nautical miles.
pub const EARTH_RADIUS_NAUTICAL_MILES: f64 = 3440.0;

/// Unit a great-circle distance is expressed in.
///
/// Each unit is bound to a spherical mean radius, not an ellipsoid.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    #[default]
    Miles,
    Kilometers,
    NauticalMiles,
}

impl DistanceUnit {
    /// All units, in display order.
    pub const ALL: [DistanceUnit; 3] = [
        DistanceUnit::Miles,
        DistanceUnit::Kilometers,
        DistanceUnit::NauticalMiles,
    ];

    /// Earth radius expressed in this unit.
    pub fn earth_radius(self) -> f64 {
        match self {
            DistanceUnit::Miles => EARTH_RADIUS_MILES,
            DistanceUnit::Kilometers => EARTH_RADIUS_KM,
            DistanceUnit::NauticalMiles => EARTH_RADIUS_NAUTICAL_MILES,
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DistanceUnit::Miles => "miles",
            DistanceUnit::Kilometers => "kilometers",
            DistanceUnit::NauticalMiles => "nautical miles",
        };
        f.write_str(name)
    }
}

impl FromStr for DistanceUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "miles" | "mi" => Ok(DistanceUnit::Miles),
            "km" | "kilometers" => Ok(DistanceUnit::Kilometers),
            "nm" | "nautical_miles" => Ok(DistanceUnit::NauticalMiles),
            other => Err(format!("unknown distance unit: {}", other)),
        }
    }
}
