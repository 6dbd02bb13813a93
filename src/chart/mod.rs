//! Chart Builders
//!
//! Turns query results into figure specifications:
//!
//! - [`success_pie`]: pie of success counts (per site, or per class for one site)
//! - [`payload_scatter`]: payload mass vs. outcome class, one trace per
//!   booster version category

pub mod figure;

pub use figure::{
    Axis, Figure, Layout, Legend, PieMarker, PieTrace, ScatterMarker, ScatterTrace, Text, Trace,
};

use crate::dataset::{LaunchRecord, PAYLOAD_MASS_COLUMN};
use crate::query::{SiteSelection, SuccessCounts};

/// Qualitative palette, cycled when there are more groups than colours
pub const SERIES_COLORS: [&str; 10] = [
    "#636EFA", // Blue
    "#EF553B", // Red
    "#00CC96", // Green
    "#AB63FA", // Purple
    "#FFA15A", // Orange
    "#19D3F3", // Cyan
    "#FF6692", // Pink
    "#B6E880", // Lime
    "#FF97FF", // Magenta
    "#FECB52", // Yellow
];

pub fn series_color(index: usize) -> &'static str {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

/// Title of the success pie for a selection
pub fn pie_title(site: &SiteSelection) -> String {
    match site.site() {
        None => "Total Success Launches By Site".to_string(),
        Some(name) => format!("Total Success Launches for site {}", name),
    }
}

/// Title of the payload scatter for a selection
pub fn scatter_title(site: &SiteSelection) -> String {
    match site.site() {
        None => "Correlation between Payload and Success for all Sites".to_string(),
        Some(name) => format!("Correlation between Payload and Success for {}", name),
    }
}

/// Pie chart with one slice per group. An empty result yields a pie trace
/// with no slices.
pub fn success_pie(counts: &SuccessCounts, site: &SiteSelection) -> Figure {
    let (labels, values): (Vec<String>, Vec<usize>) = counts.labelled().into_iter().unzip();
    let colors = (0..labels.len()).map(|i| series_color(i).to_string()).collect();

    Figure::new(pie_title(site)).trace(Trace::Pie(PieTrace {
        labels,
        values,
        marker: PieMarker { colors },
    }))
}

/// Scatter chart of the given launches, grouped by booster version category
/// in first-seen order. No launches yields a figure with no traces.
pub fn payload_scatter(records: &[&LaunchRecord], site: &SiteSelection) -> Figure {
    let mut traces: Vec<ScatterTrace> = Vec::new();

    for record in records {
        let idx = match traces
            .iter()
            .position(|t| t.name == record.booster_category)
        {
            Some(idx) => idx,
            None => {
                traces.push(ScatterTrace {
                    name: record.booster_category.clone(),
                    legendgroup: record.booster_category.clone(),
                    mode: "markers".to_string(),
                    x: Vec::new(),
                    y: Vec::new(),
                    text: Vec::new(),
                    marker: ScatterMarker {
                        color: series_color(traces.len()).to_string(),
                    },
                });
                traces.len() - 1
            }
        };

        let trace = &mut traces[idx];
        trace.x.push(record.payload_mass_kg);
        trace.y.push(record.outcome.as_u8());
        trace.text.push(hover_text(record));
    }

    let mut figure = Figure::new(scatter_title(site));
    figure.layout.xaxis = Some(Axis::titled(PAYLOAD_MASS_COLUMN));
    figure.layout.yaxis = Some(Axis {
        title: Text::new("class"),
        tickvals: Some(vec![0.0, 1.0]),
    });
    figure.layout.legend = Some(Legend {
        title: Text::new("Booster Version Category"),
    });
    figure.data = traces.into_iter().map(Trace::Scatter).collect();
    figure
}

fn hover_text(record: &LaunchRecord) -> String {
    let mut parts = Vec::with_capacity(3);
    if let Some(number) = record.flight_number {
        parts.push(format!("Flight {}", number));
    }
    parts.push(record.launch_site.clone());
    if let Some(version) = &record.booster_version {
        parts.push(version.clone());
    }
    parts.join(" | ")
}
