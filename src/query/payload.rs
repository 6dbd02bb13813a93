//! Payload Filter
//!
//! Selects the launches whose payload mass lies in a closed range,
//! optionally restricted to one site.

use serde::{Deserialize, Serialize};

use super::site::SiteSelection;
use crate::dataset::{Dataset, LaunchRecord, PayloadBounds};

/// Closed payload interval `[low, high]` in kilograms
///
/// Serialized as a two-element array, the shape the range control emits.
/// An inverted range (`low > high`) is allowed and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Range spanning the observed payload bounds
    pub fn from_bounds(bounds: PayloadBounds) -> Self {
        Self::new(bounds.min, bounds.max)
    }

    /// Inclusive on both ends
    pub fn contains(&self, mass: f64) -> bool {
        self.low <= mass && mass <= self.high
    }

    pub fn is_inverted(&self) -> bool {
        self.low > self.high
    }
}

impl From<[f64; 2]> for PayloadRange {
    fn from([low, high]: [f64; 2]) -> Self {
        Self::new(low, high)
    }
}

impl From<PayloadRange> for [f64; 2] {
    fn from(range: PayloadRange) -> Self {
        [range.low, range.high]
    }
}

impl std::fmt::Display for PayloadRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

/// Records with payload in `range` (and at `site`, unless `All`), in dataset order
pub fn filter_by_payload<'a>(
    dataset: &'a Dataset,
    range: PayloadRange,
    site: &SiteSelection,
) -> Vec<&'a LaunchRecord> {
    let selected: Vec<&LaunchRecord> = dataset
        .records()
        .iter()
        .filter(|r| range.contains(r.payload_mass_kg))
        .filter(|r| site.matches(&r.launch_site))
        .collect();

    if selected.is_empty() {
        tracing::debug!(site = %site, range = %range, "Payload filter matched no launches");
    }

    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::OutcomeClass;

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            LaunchRecord::new("A", 0.0, OutcomeClass::Failure, "v1.0"),
            LaunchRecord::new("A", 500.0, OutcomeClass::Success, "v1.1"),
            LaunchRecord::new("B", 500.0, OutcomeClass::Failure, "FT"),
            LaunchRecord::new("B", 4000.0, OutcomeClass::Success, "FT"),
            LaunchRecord::new("A", 9600.0, OutcomeClass::Success, "B5"),
        ])
        .unwrap()
    }

    #[test]
    fn test_inclusive_bounds_all_sites() {
        let dataset = dataset();
        let selected = filter_by_payload(&dataset, PayloadRange::new(500.0, 4000.0), &SiteSelection::All);

        let masses: Vec<f64> = selected.iter().map(|r| r.payload_mass_kg).collect();
        assert_eq!(masses, vec![500.0, 500.0, 4000.0]);
    }

    #[test]
    fn test_site_restriction() {
        let dataset = dataset();
        let selected = filter_by_payload(
            &dataset,
            PayloadRange::new(0.0, 10000.0),
            &SiteSelection::from("B"),
        );

        assert_eq!(selected.len(), 2);
        assert!(selected.iter().all(|r| r.launch_site == "B"));
    }

    #[test]
    fn test_full_range_returns_everything() {
        let dataset = dataset();
        let range = PayloadRange::from_bounds(dataset.payload_bounds());
        let selected = filter_by_payload(&dataset, range, &SiteSelection::All);
        assert_eq!(selected.len(), dataset.len());
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let dataset = dataset();
        let range = PayloadRange::new(5000.0, 1000.0);
        assert!(range.is_inverted());
        assert!(filter_by_payload(&dataset, range, &SiteSelection::All).is_empty());
    }

    #[test]
    fn test_range_outside_data_is_empty() {
        let dataset = Dataset::from_records(vec![
            LaunchRecord::new("A", 501.0, OutcomeClass::Success, "FT"),
            LaunchRecord::new("B", 501.0, OutcomeClass::Failure, "FT"),
        ])
        .unwrap();

        let selected = filter_by_payload(&dataset, PayloadRange::new(0.0, 500.0), &SiteSelection::All);
        assert!(selected.is_empty());
    }

    #[test]
    fn test_unknown_site_is_empty() {
        let dataset = dataset();
        let selected = filter_by_payload(
            &dataset,
            PayloadRange::new(0.0, 10000.0),
            &SiteSelection::from("Boca Chica"),
        );
        assert!(selected.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let dataset = dataset();
        let range = PayloadRange::new(0.0, 5000.0);
        let site = SiteSelection::from("A");
        assert_eq!(
            filter_by_payload(&dataset, range, &site),
            filter_by_payload(&dataset, range, &site)
        );
    }

    #[test]
    fn test_range_serde_shape() {
        let range: PayloadRange = serde_json::from_str("[2000, 8000]").unwrap();
        assert_eq!(range, PayloadRange::new(2000.0, 8000.0));
        assert_eq!(serde_json::to_string(&range).unwrap(), "[2000.0,8000.0]");
    }
}
