//! Random test fixtures.

use rand::Rng;

use crate::types::airport::Airport;
use crate::types::location::Coordinate;

/// Generates `count` random coordinates spread over the whole globe.
pub fn generate_coordinates(count: usize) -> Vec<Coordinate> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| {
            Coordinate::new(rng.gen_range(-90.0..=90.0), rng.gen_range(-180.0..=180.0))
                .expect("generated coordinate is in range")
        })
        .collect()
}

/// Generates `count` airports with synthetic codes (`T000`, `T001`, ...)
/// at random locations.
pub fn generate_airports(count: usize) -> Vec<Airport> {
    generate_coordinates(count)
        .into_iter()
        .enumerate()
        .map(|(i, location)| Airport {
            code: format!("T{:03}", i),
            name: format!("Test Airport {}", i),
            city: "Testville".to_string(),
            country: "Nowhere".to_string(),
            location,
        })
        .collect()
}
