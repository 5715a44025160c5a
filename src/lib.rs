//! Flight Path Geometry Library.
//! Computes great-circle distance, initial bearing, compass heading
//! and estimated duration between airports, and summarizes batches of
//! routes.
//!
//! ```
//! use flightpath::{AirportTable, RouteCalculator};
//!
//! let airports = AirportTable::builtin();
//! let route = RouteCalculator::default()
//!     .compute_route_by_code(&airports, "LAX", "JFK")
//!     .unwrap();
//! assert_eq!(route.compass_direction, "ENE");
//! ```

#[macro_use]
extern crate log;

pub mod types {
    pub mod airport;
    pub mod error;
    pub mod location;
    pub mod route;
    pub mod summary;
    pub mod unit;
}

pub mod utils {
    pub mod airport_table;
    pub mod compass;
    #[cfg(test)]
    pub mod generator;
    pub mod haversine;
    pub mod route_state;
}

pub mod algorithms {
    pub mod aggregate;
}

pub use algorithms::aggregate::summarize;
pub use types::airport::Airport;
pub use types::error::{
    AirportParseError, AirportTableError, ConfigError, CoordinateError, RouteError, SummaryError,
};
pub use types::location::Coordinate;
pub use types::route::RouteRecord;
pub use types::summary::BatchSummary;
pub use types::unit::DistanceUnit;
pub use utils::airport_table::{AirportTable, LoadReport};
pub use utils::compass::compass_label;
pub use utils::haversine::{distance, initial_bearing};
pub use utils::route_state::{
    BatchAnalysis, RouteCalculator, RouteConfig, SkippedRoute, DEFAULT_CRUISE_SPEED_MPH,
    POPULAR_ROUTES,
};
