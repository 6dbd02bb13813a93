//! Site Aggregator
//!
//! Success counts for the pie chart:
//!
//! - `ALL`: successful launches only, grouped by launch site
//! - one site: that site's launches, grouped by outcome class
//!
//! Groups come out in ascending key order (site name, then class 0 before 1).

use serde::Serialize;
use std::collections::BTreeMap;

use super::site::SiteSelection;
use crate::dataset::{Dataset, OutcomeClass};

/// Successful launch count for one site
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteCount {
    pub site: String,
    pub count: usize,
}

/// Launch count for one outcome class
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeCount {
    pub class: OutcomeClass,
    pub count: usize,
}

/// Result of the site aggregation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "group_by", rename_all = "snake_case")]
pub enum SuccessCounts {
    /// Successful launches per site
    Site { counts: Vec<SiteCount> },
    /// All launches of one site per outcome class
    Outcome { site: String, counts: Vec<OutcomeCount> },
}

impl SuccessCounts {
    /// Sum of all group counts
    pub fn total(&self) -> usize {
        match self {
            SuccessCounts::Site { counts } => counts.iter().map(|c| c.count).sum(),
            SuccessCounts::Outcome { counts, .. } => counts.iter().map(|c| c.count).sum(),
        }
    }

    /// Number of groups (pie slices)
    pub fn len(&self) -> usize {
        match self {
            SuccessCounts::Site { counts } => counts.len(),
            SuccessCounts::Outcome { counts, .. } => counts.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// (label, count) pairs in group order
    pub fn labelled(&self) -> Vec<(String, usize)> {
        match self {
            SuccessCounts::Site { counts } => counts
                .iter()
                .map(|c| (c.site.clone(), c.count))
                .collect(),
            SuccessCounts::Outcome { counts, .. } => counts
                .iter()
                .map(|c| (c.class.to_string(), c.count))
                .collect(),
        }
    }
}

/// Aggregate success counts for the given site selection
pub fn success_counts(dataset: &Dataset, site: &SiteSelection) -> SuccessCounts {
    let result = match site {
        SiteSelection::All => {
            let mut by_site: BTreeMap<&str, usize> = BTreeMap::new();
            for record in dataset.records().iter().filter(|r| r.is_success()) {
                *by_site.entry(record.launch_site.as_str()).or_insert(0) += 1;
            }

            SuccessCounts::Site {
                counts: by_site
                    .into_iter()
                    .map(|(site, count)| SiteCount {
                        site: site.to_string(),
                        count,
                    })
                    .collect(),
            }
        }
        SiteSelection::Site(name) => {
            let mut by_class: BTreeMap<OutcomeClass, usize> = BTreeMap::new();
            for record in dataset.records().iter().filter(|r| &r.launch_site == name) {
                *by_class.entry(record.outcome).or_insert(0) += 1;
            }

            SuccessCounts::Outcome {
                site: name.clone(),
                counts: by_class
                    .into_iter()
                    .map(|(class, count)| OutcomeCount { class, count })
                    .collect(),
            }
        }
    };

    if result.is_empty() {
        tracing::debug!(site = %site, "Site aggregation matched no launches");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::LaunchRecord;

    /// A: 3 successes + 1 failure, B: 2 failures
    fn two_site_dataset() -> Dataset {
        let success = OutcomeClass::Success;
        let failure = OutcomeClass::Failure;
        Dataset::from_records(vec![
            LaunchRecord::new("A", 100.0, success, "FT"),
            LaunchRecord::new("B", 200.0, failure, "FT"),
            LaunchRecord::new("A", 300.0, success, "FT"),
            LaunchRecord::new("A", 400.0, failure, "B4"),
            LaunchRecord::new("B", 500.0, failure, "B4"),
            LaunchRecord::new("A", 600.0, success, "B5"),
        ])
        .unwrap()
    }

    #[test]
    fn test_all_sites_counts_successes_per_site() {
        let counts = success_counts(&two_site_dataset(), &SiteSelection::All);

        assert_eq!(
            counts,
            SuccessCounts::Site {
                counts: vec![SiteCount {
                    site: "A".to_string(),
                    count: 3
                }]
            }
        );
    }

    #[test]
    fn test_single_site_partitions_by_class() {
        let counts = success_counts(&two_site_dataset(), &SiteSelection::from("B"));

        assert_eq!(
            counts,
            SuccessCounts::Outcome {
                site: "B".to_string(),
                counts: vec![OutcomeCount {
                    class: OutcomeClass::Failure,
                    count: 2
                }]
            }
        );
    }

    #[test]
    fn test_single_site_orders_failure_first() {
        let counts = success_counts(&two_site_dataset(), &SiteSelection::from("A"));

        assert_eq!(
            counts.labelled(),
            vec![("0".to_string(), 1), ("1".to_string(), 3)]
        );
    }

    #[test]
    fn test_totals_match_dataset() {
        let dataset = two_site_dataset();

        let all = success_counts(&dataset, &SiteSelection::All);
        assert_eq!(all.total(), dataset.success_count());

        for site in dataset.sites() {
            let per_site = success_counts(&dataset, &SiteSelection::from(site.as_str()));
            let launches = dataset
                .records()
                .iter()
                .filter(|r| &r.launch_site == site)
                .count();
            assert_eq!(per_site.total(), launches);
        }
    }

    #[test]
    fn test_sites_sorted_by_name() {
        let dataset = Dataset::from_records(vec![
            LaunchRecord::new("VAFB SLC-4E", 1.0, OutcomeClass::Success, "FT"),
            LaunchRecord::new("CCAFS LC-40", 1.0, OutcomeClass::Success, "FT"),
            LaunchRecord::new("KSC LC-39A", 1.0, OutcomeClass::Success, "FT"),
        ])
        .unwrap();

        let labels: Vec<String> = success_counts(&dataset, &SiteSelection::All)
            .labelled()
            .into_iter()
            .map(|(label, _)| label)
            .collect();
        assert_eq!(labels, vec!["CCAFS LC-40", "KSC LC-39A", "VAFB SLC-4E"]);
    }

    #[test]
    fn test_unknown_site_is_empty() {
        let counts = success_counts(&two_site_dataset(), &SiteSelection::from("C"));
        assert!(counts.is_empty());
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn test_idempotent() {
        let dataset = two_site_dataset();
        assert_eq!(
            success_counts(&dataset, &SiteSelection::All),
            success_counts(&dataset, &SiteSelection::All)
        );
    }

    #[test]
    fn test_serialize_tagged() {
        let counts = success_counts(&two_site_dataset(), &SiteSelection::from("B"));
        let json = serde_json::to_value(&counts).unwrap();
        assert_eq!(json["group_by"], "outcome");
        assert_eq!(json["counts"][0]["class"], 0);
        assert_eq!(json["counts"][0]["count"], 2);
    }
}
