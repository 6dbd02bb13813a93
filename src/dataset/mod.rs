//! Launch Records Dataset
//!
//! The dataset is loaded once at startup and never mutated afterwards:
//!
//! - **types**: Core data structures (LaunchRecord, OutcomeClass, PayloadBounds)
//! - **loader**: CSV reader with per-line validation
//! - **error**: Error types (all startup-fatal)
//!
//! # Example
//!
//! ```rust,no_run
//! use launchdash::dataset::Dataset;
//! use std::path::Path;
//!
//! let dataset = Dataset::load(Path::new("spacex_launch_dash.csv"))?;
//! println!("{} launches from {} sites", dataset.len(), dataset.sites().len());
//! # Ok::<(), launchdash::dataset::DatasetError>(())
//! ```

pub mod error;
pub mod loader;
pub mod types;

pub use error::{DatasetError, DatasetResult};
pub use loader::{
    LaunchCsvLoader, BOOSTER_CATEGORY_COLUMN, CLASS_COLUMN, LAUNCH_SITE_COLUMN, PAYLOAD_MASS_COLUMN,
};
pub use types::{DatasetStats, LaunchRecord, OutcomeClass, PayloadBounds, SiteStats};

use std::path::{Path, PathBuf};

/// Immutable in-memory launch table
///
/// Share it behind an `Arc` and hand out `&Dataset` to query functions.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    /// Distinct sites in first-seen order
    sites: Vec<String>,
    payload_bounds: PayloadBounds,
    source: Option<PathBuf>,
}

impl Dataset {
    /// Load the dataset from a CSV file
    pub fn load(path: &Path) -> DatasetResult<Self> {
        let records = LaunchCsvLoader::new().load(path)?;
        let mut dataset = Self::from_records(records)?;
        dataset.source = Some(path.to_path_buf());

        tracing::info!(
            path = ?path,
            records = dataset.len(),
            sites = dataset.sites.len(),
            payload_min = dataset.payload_bounds.min,
            payload_max = dataset.payload_bounds.max,
            "Loaded launch dataset"
        );

        Ok(dataset)
    }

    /// Build a dataset from already-parsed records
    pub fn from_records(records: Vec<LaunchRecord>) -> DatasetResult<Self> {
        let payload_bounds = PayloadBounds::from_records(&records).ok_or(DatasetError::Empty)?;

        let mut sites: Vec<String> = Vec::new();
        for record in &records {
            if !sites.iter().any(|s| s == &record.launch_site) {
                sites.push(record.launch_site.clone());
            }
        }

        Ok(Self {
            records,
            sites,
            payload_bounds,
            source: None,
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Distinct launch sites in the order they first appear
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn has_site(&self, site: &str) -> bool {
        self.sites.iter().any(|s| s == site)
    }

    /// Observed payload extremes, computed at load
    pub fn payload_bounds(&self) -> PayloadBounds {
        self.payload_bounds
    }

    /// File the dataset was read from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn success_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_success()).count()
    }

    /// Summary counts, per site in first-seen order
    pub fn stats(&self) -> DatasetStats {
        let sites = self
            .sites
            .iter()
            .map(|site| {
                let at_site = self.records.iter().filter(|r| &r.launch_site == site);
                let (launches, successes) = at_site.fold((0, 0), |(n, ok), r| {
                    (n + 1, ok + usize::from(r.is_success()))
                });
                SiteStats {
                    site: site.clone(),
                    launches,
                    successes,
                }
            })
            .collect();

        DatasetStats {
            total_launches: self.len(),
            total_successes: self.success_count(),
            payload_bounds: self.payload_bounds,
            sites,
        }
    }
}
