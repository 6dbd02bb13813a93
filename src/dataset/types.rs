//! Core data types for the launch records dataset
//!
//! - `LaunchRecord`: One row of the dataset (a single launch attempt)
//! - `OutcomeClass`: Binary success/failure indicator
//! - `PayloadBounds`: Observed payload mass extremes, computed once at load
//! - `DatasetStats`: Summary counts for logging and the summary endpoint

use serde::{Deserialize, Serialize};

/// Outcome of a launch attempt
///
/// Serialized as the integer used by the dataset's `class` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum OutcomeClass {
    /// Launch failed (class 0)
    Failure,
    /// Launch succeeded (class 1)
    Success,
}

impl OutcomeClass {
    /// Numeric class value as stored in the dataset
    pub fn as_u8(self) -> u8 {
        match self {
            OutcomeClass::Failure => 0,
            OutcomeClass::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        self == OutcomeClass::Success
    }

    /// Parse a class cell. Accepts `0`/`1` and their float spellings (`1.0`).
    pub fn parse(s: &str) -> Option<Self> {
        let value: f64 = s.trim().parse().ok()?;
        if value == 0.0 {
            Some(OutcomeClass::Failure)
        } else if value == 1.0 {
            Some(OutcomeClass::Success)
        } else {
            None
        }
    }
}

impl TryFrom<u8> for OutcomeClass {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(OutcomeClass::Failure),
            1 => Ok(OutcomeClass::Success),
            other => Err(format!("invalid outcome class {}, expected 0 or 1", other)),
        }
    }
}

impl From<OutcomeClass> for u8 {
    fn from(class: OutcomeClass) -> Self {
        class.as_u8()
    }
}

impl std::fmt::Display for OutcomeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// A single launch attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    /// Sequential flight number, when the dataset carries one
    #[serde(default)]
    pub flight_number: Option<u32>,
    /// Launch site label (e.g. "CCAFS LC-40")
    pub launch_site: String,
    /// Payload mass in kilograms
    pub payload_mass_kg: f64,
    /// Success or failure
    pub outcome: OutcomeClass,
    /// Full booster version (e.g. "F9 v1.1 B1011")
    #[serde(default)]
    pub booster_version: Option<String>,
    /// Booster version category, the scatter chart's colour dimension
    pub booster_category: String,
}

impl LaunchRecord {
    /// Create a record with the required attributes
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        outcome: OutcomeClass,
        booster_category: impl Into<String>,
    ) -> Self {
        Self {
            flight_number: None,
            launch_site: launch_site.into(),
            payload_mass_kg,
            outcome,
            booster_version: None,
            booster_category: booster_category.into(),
        }
    }

    /// Builder: set flight number
    pub fn flight_number(mut self, number: u32) -> Self {
        self.flight_number = Some(number);
        self
    }

    /// Builder: set full booster version
    pub fn booster_version(mut self, version: impl Into<String>) -> Self {
        self.booster_version = Some(version.into());
        self
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }
}

/// Closed interval of payload masses observed in the dataset
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayloadBounds {
    pub min: f64,
    pub max: f64,
}

impl PayloadBounds {
    /// Compute bounds over a set of records. Returns `None` for an empty set.
    pub fn from_records(records: &[LaunchRecord]) -> Option<Self> {
        let mut masses = records.iter().map(|r| r.payload_mass_kg);
        let first = masses.next()?;
        let (min, max) = masses.fold((first, first), |(lo, hi), m| (lo.min(m), hi.max(m)));
        Some(Self { min, max })
    }

    pub fn contains(&self, mass: f64) -> bool {
        self.min <= mass && mass <= self.max
    }
}

/// Per-site launch counts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteStats {
    pub site: String,
    pub launches: usize,
    pub successes: usize,
}

/// Dataset summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetStats {
    pub total_launches: usize,
    pub total_successes: usize,
    pub payload_bounds: PayloadBounds,
    /// Sites in first-seen order
    pub sites: Vec<SiteStats>,
}

impl std::fmt::Display for DatasetStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Launches: {}, Successes: {}, Sites: {}, Payload: {:.0}-{:.0} kg",
            self.total_launches,
            self.total_successes,
            self.sites.len(),
            self.payload_bounds.min,
            self.payload_bounds.max
        )
    }
}
