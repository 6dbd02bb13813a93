//! Dashboard callbacks

use crate::chart::{self, Figure};
use crate::dataset::Dataset;
use crate::query::{filter_by_payload, success_counts};

use super::binding::ControlValues;

/// Pie of success counts for the selected site(s)
pub fn render_success_pie(dataset: &Dataset, values: &ControlValues) -> Figure {
    let counts = success_counts(dataset, &values.site);
    chart::success_pie(&counts, &values.site)
}

/// Payload vs. outcome scatter for the selected site(s) and payload range
pub fn render_payload_scatter(dataset: &Dataset, values: &ControlValues) -> Figure {
    let records = filter_by_payload(dataset, values.payload, &values.site);
    chart::payload_scatter(&records, &values.site)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Trace;
    use crate::dataset::{LaunchRecord, OutcomeClass};
    use crate::query::{PayloadRange, SiteSelection};

    #[test]
    fn test_scatter_respects_range_and_site() {
        let dataset = Dataset::from_records(vec![
            LaunchRecord::new("A", 501.0, OutcomeClass::Success, "FT"),
            LaunchRecord::new("A", 2000.0, OutcomeClass::Failure, "FT"),
            LaunchRecord::new("B", 2000.0, OutcomeClass::Success, "B4"),
        ])
        .unwrap();

        let values = ControlValues {
            site: SiteSelection::from("A"),
            payload: PayloadRange::new(1000.0, 3000.0),
        };
        let figure = render_payload_scatter(&dataset, &values);
        assert_eq!(figure.point_count(), 1);

        let values = ControlValues {
            site: SiteSelection::All,
            payload: PayloadRange::new(0.0, 500.0),
        };
        assert_eq!(render_payload_scatter(&dataset, &values).point_count(), 0);
    }

    #[test]
    fn test_pie_for_site() {
        let dataset = Dataset::from_records(vec![
            LaunchRecord::new("A", 1.0, OutcomeClass::Success, "FT"),
            LaunchRecord::new("B", 1.0, OutcomeClass::Failure, "FT"),
            LaunchRecord::new("B", 1.0, OutcomeClass::Failure, "FT"),
        ])
        .unwrap();

        let values = ControlValues {
            site: SiteSelection::from("B"),
            payload: PayloadRange::new(0.0, 10000.0),
        };
        match &render_success_pie(&dataset, &values).data[0] {
            Trace::Pie(pie) => {
                assert_eq!(pie.labels, vec!["0"]);
                assert_eq!(pie.values, vec![2]);
            }
            other => panic!("Expected pie trace, got {:?}", other),
        }
    }
}
