//! Reduces a set of computed routes into a [`BatchSummary`].
//!
//! This is a pure fold over records that already carry their
//! distances; no geometry is recomputed here.

use ordered_float::OrderedFloat;

use crate::types::error::SummaryError;
use crate::types::route::RouteRecord;
use crate::types::summary::BatchSummary;

/// Summarizes an ordered sequence of routes.
///
/// Records are stably sorted by distance in miles, so among routes of
/// equal length the input order is kept. The shortest route is the
/// first element of that ordering and the longest is the last one.
///
/// # Arguments
/// * `records` - The finalized routes, in encounter order.
///
/// # Returns
/// The summary, or [`SummaryError::EmptyBatch`] when there is nothing
/// to summarize.
///
/// # Time Complexity
/// *O*(*n* log *n*) for the sort.
pub fn summarize(records: &[RouteRecord]) -> Result<BatchSummary, SummaryError> {
    if records.is_empty() {
        return Err(SummaryError::EmptyBatch);
    }

    let mut by_distance: Vec<&RouteRecord> = records.iter().collect();
    by_distance.sort_by_key(|record| OrderedFloat(record.distance_miles));

    // non-empty, checked above
    let shortest = by_distance[0];
    let longest = by_distance[by_distance.len() - 1];

    let count = records.len();
    let total_distance_miles: f64 = records.iter().map(|r| r.distance_miles).sum();
    let total_distance_km: f64 = records.iter().map(|r| r.distance_km).sum();
    let total_distance_nautical_miles: f64 =
        records.iter().map(|r| r.distance_nautical_miles).sum();
    let total_hours: f64 = records.iter().map(|r| r.estimated_hours).sum();

    debug!(
        "summarized {} routes: {:.2} miles, {:.2} hours",
        count, total_distance_miles, total_hours
    );

    Ok(BatchSummary {
        count,
        total_distance_miles,
        average_distance_miles: total_distance_miles / count as f64,
        total_distance_km,
        total_distance_nautical_miles,
        total_hours,
        average_hours: total_hours / count as f64,
        shortest: shortest.clone(),
        longest: longest.clone(),
    })
}

#[cfg(test)]
mod aggregate_tests {
    use super::*;
    use crate::types::airport::Airport;
    use crate::types::unit::DistanceUnit;

    fn record(origin: &str, destination: &str, miles: f64) -> RouteRecord {
        RouteRecord {
            origin: Airport::new(origin, origin, "City", "Country", 0.0, 0.0).unwrap(),
            destination: Airport::new(destination, destination, "City", "Country", 1.0, 1.0)
                .unwrap(),
            distance_miles: miles,
            distance_km: miles * 6371.0 / 3959.0,
            distance_nautical_miles: miles * 3440.0 / 3959.0,
            bearing_degrees: 45.0,
            compass_direction: "NE",
            estimated_hours: miles / 500.0,
        }
    }

    #[test]
    fn test_empty_batch() {
        assert_eq!(summarize(&[]), Err(SummaryError::EmptyBatch));
    }

    #[test]
    fn test_single_record() {
        let only = record("LAX", "JFK", 2475.0);
        let summary = summarize(&[only.clone()]).unwrap();
        assert_eq!(summary.count, 1);
        assert_eq!(summary.shortest, only);
        assert_eq!(summary.longest, only);
        assert_eq!(summary.average_distance_miles, summary.total_distance_miles);
        assert_eq!(summary.average_hours, summary.total_hours);
        assert_eq!(
            summary.average_distance(DistanceUnit::Kilometers),
            summary.total_distance(DistanceUnit::Kilometers)
        );
    }

    #[test]
    fn test_totals_and_extremes() {
        let records = vec![
            record("LHR", "JFK", 3451.0),
            record("LAX", "JFK", 2475.0),
            record("SYD", "LAX", 7488.0),
        ];
        let summary = summarize(&records).unwrap();
        assert_eq!(summary.count, 3);
        assert_eq!(summary.total_distance_miles, 3451.0 + 2475.0 + 7488.0);
        assert!((summary.average_distance_miles - 13414.0 / 3.0).abs() < 1e-9);
        assert!((summary.total_hours - 13414.0 / 500.0).abs() < 1e-9);
        assert_eq!(summary.shortest.origin.code, "LAX");
        assert_eq!(summary.longest.origin.code, "SYD");
    }

    /// Equal distances keep encounter order in the sorted sequence.
    #[test]
    fn test_ties_keep_encounter_order() {
        let records = vec![
            record("AAA", "BBB", 100.0),
            record("CCC", "DDD", 100.0),
            record("EEE", "FFF", 100.0),
        ];
        let summary = summarize(&records).unwrap();
        assert_eq!(summary.shortest.origin.code, "AAA");
        assert_eq!(summary.longest.origin.code, "EEE");
    }

    /// Summarizing never reorders or alters the caller's records.
    #[test]
    fn test_input_is_untouched() {
        let records = vec![record("LHR", "JFK", 3451.0), record("LAX", "JFK", 2475.0)];
        let before = records.clone();
        summarize(&records).unwrap();
        assert_eq!(records, before);
    }
}
