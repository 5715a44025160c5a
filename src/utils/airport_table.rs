//! Airport reference table and its CSV loader.
//!
//! The CSV layout is one airport per row under the header
//! `Airport_Code,Airport_Name,City,Country,Latitude,Longitude`.
//! Rows that fail to parse are collected in the [`LoadReport`] and
//! logged; they never abort the load.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use once_cell::sync::Lazy;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::types::airport::{normalize_code, Airport};
use crate::types::error::{AirportParseError, AirportTableError, RouteError};
use crate::types::location::Coordinate;

/// Code, name, city, country, latitude, longitude.
const DEFAULT_AIRPORT_DATA: [(&str, &str, &str, &str, f64, f64); 10] = [
    ("LAX", "Los Angeles International", "Los Angeles", "USA", 33.9425, -118.4081),
    ("JFK", "John F. Kennedy International", "New York", "USA", 40.6413, -73.7781),
    ("LHR", "London Heathrow", "London", "UK", 51.4700, -0.4543),
    ("NRT", "Tokyo Narita", "Tokyo", "Japan", 35.7647, 140.3864),
    ("SYD", "Sydney Kingsford Smith", "Sydney", "Australia", -33.9399, 151.1753),
    ("DXB", "Dubai International", "Dubai", "UAE", 25.2532, 55.3657),
    ("CDG", "Charles de Gaulle", "Paris", "France", 49.0097, 2.5479),
    ("FRA", "Frankfurt am Main", "Frankfurt", "Germany", 50.0379, 8.5622),
    ("SIN", "Singapore Changi", "Singapore", "Singapore", 1.3644, 103.9915),
    ("ORD", "O'Hare International", "Chicago", "USA", 41.9742, -87.9073),
];

/// Built once from [`DEFAULT_AIRPORT_DATA`].
static BUILTIN_AIRPORTS: Lazy<AirportTable> = Lazy::new(|| {
    let mut table = AirportTable::new();
    for (code, name, city, country, lat, lon) in DEFAULT_AIRPORT_DATA {
        table.insert(Airport {
            code: code.to_string(),
            name: name.to_string(),
            city: city.to_string(),
            country: country.to_string(),
            location: Coordinate {
                latitude: OrderedFloat(lat),
                longitude: OrderedFloat(lon),
            },
        });
    }
    table
});

/// One raw CSV row, before validation.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AirportRow {
    #[serde(rename = "Airport_Code", default)]
    pub code: Option<String>,
    #[serde(rename = "Airport_Name", default)]
    pub name: Option<String>,
    #[serde(rename = "City", default)]
    pub city: Option<String>,
    #[serde(rename = "Country", default)]
    pub country: Option<String>,
    #[serde(rename = "Latitude", default)]
    pub latitude: Option<String>,
    #[serde(rename = "Longitude", default)]
    pub longitude: Option<String>,
}

fn required(value: Option<String>, field: &'static str) -> Result<String, AirportParseError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(AirportParseError::MissingField(field)),
    }
}

fn parse_degrees(value: Option<String>, field: &'static str) -> Result<f64, AirportParseError> {
    let raw = required(value, field)?;
    raw.parse::<f64>()
        .map_err(|_| AirportParseError::InvalidNumber { field, value: raw })
}

impl TryFrom<AirportRow> for Airport {
    type Error = AirportParseError;

    fn try_from(row: AirportRow) -> Result<Self, Self::Error> {
        let code = required(row.code, "Airport_Code")?;
        let name = required(row.name, "Airport_Name")?;
        let city = row.city.unwrap_or_default();
        let country = row.country.unwrap_or_default();
        let latitude = parse_degrees(row.latitude, "Latitude")?;
        let longitude = parse_degrees(row.longitude, "Longitude")?;
        Ok(Airport::new(&code, &name, &city, &country, latitude, longitude)?)
    }
}

impl From<&Airport> for AirportRow {
    fn from(airport: &Airport) -> Self {
        AirportRow {
            code: Some(airport.code.clone()),
            name: Some(airport.name.clone()),
            city: Some(airport.city.clone()),
            country: Some(airport.country.clone()),
            latitude: Some(airport.location.lat().to_string()),
            longitude: Some(airport.location.lon().to_string()),
        }
    }
}

/// Outcome of loading a CSV airport file.
#[derive(Debug)]
pub struct LoadReport {
    /// Every airport that parsed.
    pub table: AirportTable,

    /// Rejected rows as `(line number, reason)`. Line 1 is the header.
    pub rejected: Vec<(usize, AirportParseError)>,
}

/// Airports keyed by upper-cased code, iterated in code order.
#[derive(Debug, Clone, Default)]
pub struct AirportTable {
    airports: BTreeMap<String, Airport>,
}

impl AirportTable {
    /// Create an empty airport table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in ten-airport reference table.
    pub fn builtin() -> Self {
        BUILTIN_AIRPORTS.clone()
    }

    /// Load airports from a CSV reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<LoadReport, AirportTableError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        debug!("CSV headers: {:?}", headers);

        let mut table = AirportTable::new();
        let mut rejected = Vec::new();
        for (index, row) in csv_reader.deserialize::<AirportRow>().enumerate() {
            let line = index + 2;
            let parsed = row
                .map_err(AirportParseError::from)
                .and_then(Airport::try_from);
            match parsed {
                Ok(airport) => {
                    table.insert(airport);
                }
                Err(e) => {
                    warn!("Skipping invalid airport record on line {}: {}", line, e);
                    rejected.push((line, e));
                }
            }
        }

        info!("Loaded {} airports", table.len());
        Ok(LoadReport { table, rejected })
    }

    /// Load airports from a CSV file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<LoadReport, AirportTableError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AirportTableError::NotFound(path.to_path_buf()));
        }
        info!("Loading airports from {}", path.display());
        Self::from_reader(File::open(path)?)
    }

    /// Load airports from `path`, writing the built-in table there first
    /// if the file does not exist yet.
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<LoadReport, AirportTableError> {
        let path = path.as_ref();
        if !path.exists() {
            warn!(
                "Airport database not found at {}, creating default database",
                path.display()
            );
            Self::builtin().write_csv(path)?;
        }
        Self::from_path(path)
    }

    /// Write the table as CSV, creating parent directories as needed.
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> Result<(), AirportTableError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut writer = csv::Writer::from_path(path)?;
        for airport in self.iter() {
            writer.serialize(AirportRow::from(airport))?;
        }
        writer.flush()?;
        info!("Wrote {} airports to {}", self.len(), path.display());
        Ok(())
    }

    /// Insert an airport, replacing any previous one with the same code.
    pub fn insert(&mut self, airport: Airport) -> Option<Airport> {
        self.airports.insert(normalize_code(&airport.code), airport)
    }

    /// Look up an airport by code, ignoring case and surrounding spaces.
    pub fn get(&self, code: &str) -> Option<&Airport> {
        self.airports.get(&normalize_code(code))
    }

    /// Like [`AirportTable::get`] but reports a missing code as
    /// [`RouteError::UnknownAirport`].
    pub fn lookup(&self, code: &str) -> Result<&Airport, RouteError> {
        self.get(code)
            .ok_or_else(|| RouteError::UnknownAirport(normalize_code(code)))
    }

    /// Airports sorted by code.
    pub fn iter(&self) -> impl Iterator<Item = &Airport> {
        self.airports.values()
    }

    /// Codes in sorted order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.airports.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }
}

#[cfg(test)]
mod airport_table_tests {
    use super::*;

    const HEADER: &str = "Airport_Code,Airport_Name,City,Country,Latitude,Longitude\n";

    #[test]
    fn test_builtin_table() {
        let table = AirportTable::builtin();
        assert_eq!(table.len(), 10);
        let jfk = table.get("jfk").unwrap();
        assert_eq!(jfk.location.lat(), 40.6413);
        assert_eq!(jfk.location.lon(), -73.7781);
        assert!(table.get("XYZ").is_none());
    }

    #[test]
    fn test_codes_are_sorted() {
        let table = AirportTable::builtin();
        let codes: Vec<&str> = table.codes().collect();
        let mut sorted = codes.clone();
        sorted.sort();
        assert_eq!(codes, sorted);
        assert_eq!(codes[0], "CDG");
    }

    #[test]
    fn test_lookup_unknown() {
        let table = AirportTable::builtin();
        assert_eq!(
            table.lookup(" xyz ").unwrap_err(),
            RouteError::UnknownAirport("XYZ".to_string())
        );
    }

    #[test]
    fn test_load_from_reader() {
        let data = format!(
            "{}LAX,Los Angeles International,Los Angeles,USA,33.9425,-118.4081\n\
             lhr , London Heathrow , London , UK , 51.4700 , -0.4543\n",
            HEADER
        );
        let report = AirportTable::from_reader(data.as_bytes()).unwrap();
        assert!(report.rejected.is_empty());
        assert_eq!(report.table.len(), 2);
        let lhr = report.table.get("LHR").unwrap();
        assert_eq!(lhr.name, "London Heathrow");
        assert_eq!(lhr.location.lat(), 51.47);
    }

    /// One bad row must not abort the whole load.
    #[test]
    fn test_bad_rows_are_collected() {
        let data = format!(
            "{}LAX,Los Angeles International,Los Angeles,USA,33.9425,-118.4081\n\
             BAD,Broken,Nowhere,None,north,-1.0\n\
             FAR,Too Far,Nowhere,None,95.0,0.0\n\
             ,No Code,Nowhere,None,1.0,1.0\n\
             JFK,John F. Kennedy International,New York,USA,40.6413,-73.7781\n",
            HEADER
        );
        let report = AirportTable::from_reader(data.as_bytes()).unwrap();
        assert_eq!(report.table.len(), 2);
        assert_eq!(report.rejected.len(), 3);

        let lines: Vec<usize> = report.rejected.iter().map(|(line, _)| *line).collect();
        assert_eq!(lines, vec![3, 4, 5]);
        assert!(matches!(
            report.rejected[0].1,
            AirportParseError::InvalidNumber { field: "Latitude", .. }
        ));
        assert!(matches!(
            report.rejected[1].1,
            AirportParseError::InvalidCoordinate(_)
        ));
        assert!(matches!(
            report.rejected[2].1,
            AirportParseError::MissingField("Airport_Code")
        ));
    }

    #[test]
    fn test_not_found_error() {
        let result = AirportTable::from_path("/nonexistent/path/airports.csv");
        assert!(matches!(result, Err(AirportTableError::NotFound(_))));
    }

    #[test]
    fn test_load_or_create_writes_default() {
        let dir = std::env::temp_dir().join(format!("flightpath-test-{}", std::process::id()));
        let path = dir.join("data").join("airports.csv");
        let _ = fs::remove_dir_all(&dir);

        let report = AirportTable::load_or_create(&path).unwrap();
        assert!(path.exists());
        assert!(report.rejected.is_empty());
        assert_eq!(report.table.len(), 10);
        assert_eq!(
            report.table.get("SYD").unwrap().location,
            AirportTable::builtin().get("SYD").unwrap().location
        );

        let _ = fs::remove_dir_all(&dir);
    }
}
