//! Figure Specification
//!
//! Serializable chart descriptions in the `{ data, layout }` shape accepted
//! by Plotly's `react`/`newPlot`. The server builds these; the browser renders.

use serde::Serialize;

/// A complete chart: traces plus layout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            data: Vec::new(),
            layout: Layout::titled(title),
        }
    }

    /// Builder: append a trace
    pub fn trace(mut self, trace: Trace) -> Self {
        self.data.push(trace);
        self
    }

    pub fn title(&self) -> &str {
        &self.layout.title.text
    }

    /// Number of plotted marks: pie slices or scatter points
    pub fn point_count(&self) -> usize {
        self.data.iter().map(Trace::len).sum()
    }

    /// True when nothing would be drawn
    pub fn is_empty(&self) -> bool {
        self.point_count() == 0
    }
}

/// One data series
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Pie(PieTrace),
    Scatter(ScatterTrace),
}

impl Trace {
    pub fn len(&self) -> usize {
        match self {
            Trace::Pie(pie) => pie.values.len(),
            Trace::Scatter(scatter) => scatter.x.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieTrace {
    pub labels: Vec<String>,
    pub values: Vec<usize>,
    pub marker: PieMarker,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieMarker {
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterTrace {
    /// Legend entry (booster version category)
    pub name: String,
    pub legendgroup: String,
    pub mode: String,
    pub x: Vec<f64>,
    pub y: Vec<u8>,
    /// Hover text, one entry per point
    pub text: Vec<String>,
    pub marker: ScatterMarker,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterMarker {
    pub color: String,
}

/// Chart layout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Text,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
}

impl Layout {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Text::new(title),
            xaxis: None,
            yaxis: None,
            legend: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
    pub text: String,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Text,
    /// Explicit tick values; the class axis only shows 0 and 1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickvals: Option<Vec<f64>>,
}

impl Axis {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Text::new(title),
            tickvals: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: Text,
}
