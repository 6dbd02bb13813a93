//! Page Layout
//!
//! Control definitions the page needs to build itself: dropdown options and
//! range control bounds. The control values seeded here match
//! [`ControlValues::initial`](super::ControlValues::initial).

use serde::Serialize;

use crate::dataset::Dataset;
use crate::query::{PayloadRange, ALL_SITES, ALL_SITES_LABEL};

use super::binding::{ControlId, OutputId};

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";

/// Fixed display range of the payload control (kg)
pub const SLIDER_MIN: f64 = 0.0;
pub const SLIDER_MAX: f64 = 10000.0;
pub const SLIDER_STEP: f64 = 1000.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardLayout {
    pub title: String,
    pub site_dropdown: DropdownSpec,
    pub payload_slider: RangeSliderSpec,
    pub outputs: Vec<OutputId>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownSpec {
    pub id: ControlId,
    pub options: Vec<DropdownOption>,
    pub value: String,
    pub placeholder: String,
    pub searchable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeSliderSpec {
    pub id: ControlId,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Initial value: the observed payload bounds
    pub value: PayloadRange,
}

impl DashboardLayout {
    pub fn for_dataset(dataset: &Dataset) -> Self {
        let mut options = Vec::with_capacity(dataset.sites().len() + 1);
        options.push(DropdownOption {
            label: ALL_SITES_LABEL.to_string(),
            value: ALL_SITES.to_string(),
        });
        options.extend(dataset.sites().iter().map(|site| DropdownOption {
            label: site.clone(),
            value: site.clone(),
        }));

        Self {
            title: DASHBOARD_TITLE.to_string(),
            site_dropdown: DropdownSpec {
                id: ControlId::SiteDropdown,
                options,
                value: ALL_SITES.to_string(),
                placeholder: "Select a Launch Site here".to_string(),
                searchable: true,
            },
            payload_slider: RangeSliderSpec {
                id: ControlId::PayloadSlider,
                min: SLIDER_MIN,
                max: SLIDER_MAX,
                step: SLIDER_STEP,
                value: PayloadRange::from_bounds(dataset.payload_bounds()),
            },
            outputs: vec![
                OutputId::SuccessPieChart,
                OutputId::SuccessPayloadScatterChart,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{LaunchRecord, OutcomeClass};

    #[test]
    fn test_layout_for_dataset() {
        let dataset = Dataset::from_records(vec![
            LaunchRecord::new("CCAFS LC-40", 0.0, OutcomeClass::Failure, "v1.0"),
            LaunchRecord::new("VAFB SLC-4E", 9600.0, OutcomeClass::Success, "FT"),
            LaunchRecord::new("KSC LC-39A", 2490.0, OutcomeClass::Success, "FT"),
        ])
        .unwrap();

        let layout = DashboardLayout::for_dataset(&dataset);

        let values: Vec<&str> = layout
            .site_dropdown
            .options
            .iter()
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(values, vec!["ALL", "CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A"]);
        assert_eq!(layout.site_dropdown.options[0].label, "All Sites");
        assert_eq!(layout.site_dropdown.value, "ALL");

        assert_eq!(layout.payload_slider.min, 0.0);
        assert_eq!(layout.payload_slider.max, 10000.0);
        assert_eq!(layout.payload_slider.step, 1000.0);
        assert_eq!(layout.payload_slider.value, PayloadRange::new(0.0, 9600.0));
    }

    #[test]
    fn test_layout_json() {
        let dataset = Dataset::from_records(vec![LaunchRecord::new(
            "A",
            500.0,
            OutcomeClass::Success,
            "FT",
        )])
        .unwrap();

        let json = serde_json::to_value(DashboardLayout::for_dataset(&dataset)).unwrap();
        assert_eq!(json["site_dropdown"]["id"], "site-dropdown");
        assert_eq!(json["payload_slider"]["value"], serde_json::json!([500.0, 500.0]));
        assert_eq!(json["outputs"][0], "success-pie-chart");
    }
}
