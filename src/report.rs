//! Plain-text rendering of routes and batch summaries.

use std::fmt::{self, Write as _};
use std::fs;
use std::io;
use std::path::Path;

use chrono::Local;
use flightpath::{
    AirportTable, BatchAnalysis, BatchSummary, DistanceUnit, RouteConfig, RouteRecord,
    SummaryError,
};
use serde_json::{json, Value};

const RULE_WIDTH: usize = 70;

/// Formats `value` with `decimals` places and thousands separators.
pub fn with_commas(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (negative, digits) = match formatted.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, formatted.as_str()),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    let mut grouped = String::new();
    // rounds to zero: no sign
    if negative && digits.chars().any(|c| matches!(c, '1'..='9')) {
        grouped.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

fn rule(out: &mut String, c: char) -> fmt::Result {
    writeln!(out, "{}", c.to_string().repeat(RULE_WIDTH))
}

/// Renders a single route the way the `route` command prints it.
pub fn render_route(route: &RouteRecord, config: &RouteConfig) -> Result<String, fmt::Error> {
    let mut out = String::new();
    rule(&mut out, '=')?;
    writeln!(out, "   FLIGHT ROUTE ANALYSIS")?;
    rule(&mut out, '=')?;

    for (title, airport) in [("DEPARTURE", &route.origin), ("ARRIVAL", &route.destination)] {
        writeln!(out, "\n  {}: {} - {}", title, airport.code, airport.name)?;
        writeln!(out, "     {}, {}", airport.city, airport.country)?;
        writeln!(out, "     {}", airport.location)?;
    }

    writeln!(out, "\n  DISTANCE:")?;
    for unit in DistanceUnit::ALL {
        writeln!(out, "    {} {}", with_commas(route.distance(unit), 2), unit)?;
    }

    writeln!(out, "\n  NAVIGATION:")?;
    writeln!(out, "   Initial Bearing: {:.1}°", route.bearing_degrees)?;
    writeln!(out, "   Compass Direction: {}", route.compass_direction)?;

    let (hours, minutes) = route.hours_minutes();
    writeln!(out, "\n  ESTIMATED FLIGHT TIME:")?;
    writeln!(out, "   Duration: {}h {}m", hours, minutes)?;
    writeln!(out, "   Total Hours: {:.2}", route.estimated_hours)?;
    writeln!(
        out,
        "   (Based on {} {} per hour average speed)",
        with_commas(config.cruise_speed, 0),
        config.speed_unit
    )?;
    rule(&mut out, '=')?;
    Ok(out)
}

fn render_extreme(
    out: &mut String,
    title: &str,
    route: &RouteRecord,
    unit: DistanceUnit,
) -> fmt::Result {
    writeln!(out, "\n{}:", title)?;
    writeln!(out, "   {}", route.label())?;
    writeln!(
        out,
        "   Distance: {} {}",
        with_commas(route.distance(unit), 2),
        unit
    )?;
    writeln!(out, "   Flight Time: {:.2} hours", route.estimated_hours)
}

/// Renders the per-route lines, skipped pairs and the batch summary.
pub fn render_batch(
    analysis: &BatchAnalysis,
    summary: &Result<BatchSummary, SummaryError>,
    unit: DistanceUnit,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    rule(&mut out, '=')?;
    writeln!(out, "BATCH ROUTE ANALYSIS RESULTS")?;
    rule(&mut out, '=')?;

    if !analysis.records.is_empty() {
        writeln!(out, "\nINDIVIDUAL ROUTES:")?;
        for route in &analysis.records {
            writeln!(
                out,
                "   {:<12} {:>12} {}  {:>5.1}° {:<3}  {:.2} h",
                route.label(),
                with_commas(route.distance(unit), 2),
                unit,
                route.bearing_degrees,
                route.compass_direction,
                route.estimated_hours
            )?;
        }
    }

    if !analysis.skipped.is_empty() {
        writeln!(out, "\nSKIPPED ROUTES:")?;
        for skipped in &analysis.skipped {
            writeln!(
                out,
                "   {} → {}: {}",
                skipped.origin, skipped.destination, skipped.reason
            )?;
        }
    }

    match summary {
        Ok(summary) => {
            writeln!(out, "\nSUMMARY STATISTICS:")?;
            writeln!(out, "   Total Routes Analyzed: {}", summary.count)?;
            writeln!(
                out,
                "   Total Distance: {} {}",
                with_commas(summary.total_distance(unit), 2),
                unit
            )?;
            writeln!(
                out,
                "   Average Distance: {} {}",
                with_commas(summary.average_distance(unit), 2),
                unit
            )?;
            writeln!(out, "   Total Flight Time: {:.2} hours", summary.total_hours)?;
            writeln!(
                out,
                "   Average Flight Time: {:.2} hours",
                summary.average_hours
            )?;
            render_extreme(&mut out, "SHORTEST ROUTE", &summary.shortest, unit)?;
            render_extreme(&mut out, "LONGEST ROUTE", &summary.longest, unit)?;
        }
        Err(SummaryError::EmptyBatch) => {
            writeln!(out, "\nNothing to summarize: no valid routes.")?;
        }
    }
    rule(&mut out, '=')?;
    Ok(out)
}

/// Batch results as a JSON document: computed routes, skipped pairs
/// with their reasons, and the summary (`null` when nothing was
/// computed).
pub fn batch_json(
    analysis: &BatchAnalysis,
    summary: &Result<BatchSummary, SummaryError>,
) -> Value {
    json!({
        "routes": analysis.records,
        "skipped": analysis
            .skipped
            .iter()
            .map(|s| json!({
                "origin": s.origin,
                "destination": s.destination,
                "reason": s.reason.to_string(),
            }))
            .collect::<Vec<_>>(),
        "summary": summary.as_ref().ok(),
    })
}

/// Lists the airport table sorted by code.
pub fn render_airports(airports: &AirportTable) -> Result<String, fmt::Error> {
    let mut out = String::from("AVAILABLE AIRPORTS:\n");
    for airport in airports.iter() {
        writeln!(
            out,
            "   • {:<4} | {:<20} | {}",
            airport.code, airport.city, airport.country
        )?;
    }
    Ok(out)
}

/// Writes `body` to `path` under a generation timestamp, creating
/// parent directories as needed.
pub fn save_report(path: &Path, body: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let contents = format!(
        "FLIGHT ROUTE ANALYSIS REPORT\nGenerated: {}\n\n{}",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        body
    );
    fs::write(path, contents)?;
    log::info!("Route analysis saved to {}", path.display());
    Ok(())
}
