//! CSV Loader
//!
//! Reads the launch records CSV. Columns are located by header name, so
//! column order does not matter and extra columns are ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::error::{DatasetError, DatasetResult};
use super::types::{LaunchRecord, OutcomeClass};

/// Header names of the required columns
pub const LAUNCH_SITE_COLUMN: &str = "Launch Site";
pub const PAYLOAD_MASS_COLUMN: &str = "Payload Mass (kg)";
pub const CLASS_COLUMN: &str = "class";
pub const BOOSTER_CATEGORY_COLUMN: &str = "Booster Version Category";

const REQUIRED_COLUMNS: [&str; 4] = [
    LAUNCH_SITE_COLUMN,
    PAYLOAD_MASS_COLUMN,
    CLASS_COLUMN,
    BOOSTER_CATEGORY_COLUMN,
];

/// One CSV row before validation
#[derive(Debug, Deserialize)]
struct RawLaunchRow {
    #[serde(rename = "Flight Number", default)]
    flight_number: Option<String>,
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "class")]
    class: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass: String,
    #[serde(rename = "Booster Version", default)]
    booster_version: Option<String>,
    #[serde(rename = "Booster Version Category")]
    booster_category: String,
}

/// Launch records CSV loader
#[derive(Debug, Clone)]
pub struct LaunchCsvLoader {
    delimiter: u8,
}

impl Default for LaunchCsvLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl LaunchCsvLoader {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Load records from a CSV file
    pub fn load(&self, path: &Path) -> DatasetResult<Vec<LaunchRecord>> {
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.read_records(file)
    }

    /// Load records from an in-memory CSV string
    pub fn load_str(&self, csv_data: &str) -> DatasetResult<Vec<LaunchRecord>> {
        self.read_records(csv_data.as_bytes())
    }

    fn read_records<R: Read>(&self, source: R) -> DatasetResult<Vec<LaunchRecord>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .delimiter(self.delimiter)
            .trim(csv::Trim::All)
            .from_reader(source);

        let headers = reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DatasetError::MissingColumn(column.to_string()));
            }
        }

        let mut records = Vec::new();
        for result in reader.records() {
            let row = result?;
            let line = row.position().map(|p| p.line()).unwrap_or(0);

            let raw: RawLaunchRow =
                row.deserialize(Some(&headers))
                    .map_err(|e| DatasetError::InvalidRecord {
                        line,
                        reason: e.to_string(),
                    })?;

            records.push(validate_row(raw, line)?);
        }

        Ok(records)
    }
}

/// Convert a raw row into a `LaunchRecord`, rejecting unpopulated attributes
fn validate_row(raw: RawLaunchRow, line: u64) -> DatasetResult<LaunchRecord> {
    let invalid = |reason: String| DatasetError::InvalidRecord { line, reason };

    if raw.launch_site.is_empty() {
        return Err(invalid(format!("empty {}", LAUNCH_SITE_COLUMN)));
    }
    if raw.booster_category.is_empty() {
        return Err(invalid(format!("empty {}", BOOSTER_CATEGORY_COLUMN)));
    }

    let payload_mass_kg: f64 = raw
        .payload_mass
        .parse()
        .map_err(|_| invalid(format!("invalid payload mass '{}'", raw.payload_mass)))?;
    if !payload_mass_kg.is_finite() || payload_mass_kg < 0.0 {
        return Err(invalid(format!(
            "payload mass must be a non-negative number, got {}",
            raw.payload_mass
        )));
    }

    let outcome = OutcomeClass::parse(&raw.class)
        .ok_or_else(|| invalid(format!("invalid class '{}', expected 0 or 1", raw.class)))?;

    let mut record = LaunchRecord::new(
        raw.launch_site,
        payload_mass_kg,
        outcome,
        raw.booster_category,
    );

    if let Some(number) = raw.flight_number.filter(|s| !s.is_empty()) {
        let parsed = parse_flight_number(&number)
            .ok_or_else(|| invalid(format!("invalid flight number '{}'", number)))?;
        record = record.flight_number(parsed);
    }

    if let Some(version) = raw.booster_version.filter(|s| !s.is_empty()) {
        record = record.booster_version(version);
    }

    Ok(record)
}

fn parse_flight_number(s: &str) -> Option<u32> {
    if let Ok(n) = s.parse::<u32>() {
        return Some(n);
    }
    // Exported dataframes sometimes write integer columns as floats
    let f: f64 = s.parse().ok()?;
    if f >= 0.0 && f.fract() == 0.0 && f <= u32::MAX as f64 {
        Some(f as u32)
    } else {
        None
    }
}
