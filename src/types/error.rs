//! Error types shared across the library.

use std::path::PathBuf;

/// A coordinate outside the valid latitude/longitude ranges.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum CoordinateError {
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
    #[error("coordinate is not a finite number")]
    NotFinite,
}

/// Why a single route could not be computed.
///
/// A batch skips the failing pair and keeps going.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouteError {
    /// The code is not in the airport table.
    #[error("airport '{0}' not found in database")]
    UnknownAirport(String),

    /// Origin and destination are the same airport.
    #[error("origin and destination cannot be the same airport ({0})")]
    SameAirport(String),

    /// The airport was found but carries meaningless coordinates.
    #[error("airport '{code}' has invalid coordinates: {source}")]
    InvalidCoordinate {
        code: String,
        #[source]
        source: CoordinateError,
    },
}

/// Reduction over a batch of routes failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SummaryError {
    #[error("no valid routes to summarize")]
    EmptyBatch,
}

/// A single airport row could not be turned into an [`Airport`](super::airport::Airport).
#[derive(Debug, thiserror::Error)]
pub enum AirportParseError {
    #[error("missing field '{0}'")]
    MissingField(&'static str),
    #[error("invalid {field} '{value}'")]
    InvalidNumber { field: &'static str, value: String },
    #[error("invalid coordinates: {0}")]
    InvalidCoordinate(#[from] CoordinateError),
    #[error("malformed row: {0}")]
    Csv(#[from] csv::Error),
}

/// The airport table as a whole could not be read or written.
#[derive(Debug, thiserror::Error)]
pub enum AirportTableError {
    #[error("airport database not found at: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Invalid route calculation settings.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("cruise speed must be a positive number, got {0}")]
    InvalidCruiseSpeed(f64),
}
