//! Binding Registry
//!
//! Each binding ties a set of input controls to one output through a
//! handler. When a control changes, every binding that lists it as an input
//! is invoked synchronously, in registration order, and its figure is
//! returned as an update for the bound output.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::chart::Figure;
use crate::dataset::Dataset;
use crate::query::{PayloadRange, SiteSelection};

use super::handlers;

/// Input controls on the dashboard page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlId {
    SiteDropdown,
    PayloadSlider,
}

impl ControlId {
    pub fn as_str(self) -> &'static str {
        match self {
            ControlId::SiteDropdown => "site-dropdown",
            ControlId::PayloadSlider => "payload-slider",
        }
    }
}

impl std::fmt::Display for ControlId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Chart outputs on the dashboard page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputId {
    SuccessPieChart,
    SuccessPayloadScatterChart,
}

impl OutputId {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputId::SuccessPieChart => "success-pie-chart",
            OutputId::SuccessPayloadScatterChart => "success-payload-scatter-chart",
        }
    }
}

impl std::fmt::Display for OutputId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current value of every control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlValues {
    #[serde(rename = "site-dropdown", default)]
    pub site: SiteSelection,
    #[serde(rename = "payload-slider")]
    pub payload: PayloadRange,
}

impl ControlValues {
    /// Initial page state: all sites, range spanning the observed payloads
    pub fn initial(dataset: &Dataset) -> Self {
        Self {
            site: SiteSelection::All,
            payload: PayloadRange::from_bounds(dataset.payload_bounds()),
        }
    }

    /// Apply a change. Returns false when the value was already current.
    pub fn apply(&mut self, change: ControlChange) -> bool {
        match change {
            ControlChange::Site(site) => {
                if self.site == site {
                    return false;
                }
                self.site = site;
            }
            ControlChange::Payload(range) => {
                if self.payload == range {
                    return false;
                }
                self.payload = range;
            }
        }
        true
    }
}

/// A new value for one control
#[derive(Debug, Clone, PartialEq)]
pub enum ControlChange {
    Site(SiteSelection),
    Payload(PayloadRange),
}

impl ControlChange {
    pub fn control(&self) -> ControlId {
        match self {
            ControlChange::Site(_) => ControlId::SiteDropdown,
            ControlChange::Payload(_) => ControlId::PayloadSlider,
        }
    }

    /// Decode a raw JSON value for a control
    ///
    /// A cleared dropdown (`null`) selects all sites.
    pub fn from_json(control: ControlId, value: serde_json::Value) -> Result<Self, BindingError> {
        let invalid = |reason: String| BindingError::InvalidValue { control, reason };

        match control {
            ControlId::SiteDropdown => match value {
                serde_json::Value::Null => Ok(ControlChange::Site(SiteSelection::All)),
                serde_json::Value::String(s) => Ok(ControlChange::Site(SiteSelection::from(s))),
                other => Err(invalid(format!("expected a site name, got {}", other))),
            },
            ControlId::PayloadSlider => serde_json::from_value::<PayloadRange>(value)
                .map(ControlChange::Payload)
                .map_err(|e| invalid(format!("expected [low, high]: {}", e))),
        }
    }
}

/// Figure produced for one output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputUpdate {
    pub output: OutputId,
    pub figure: Figure,
}

/// Pure function from (dataset, control values) to a figure
pub type Handler = fn(&Dataset, &ControlValues) -> Figure;

/// One (inputs → handler → output) registration
pub struct Binding {
    pub output: OutputId,
    pub inputs: Vec<ControlId>,
    handler: Handler,
}

impl Binding {
    pub fn listens_to(&self, control: ControlId) -> bool {
        self.inputs.contains(&control)
    }

    pub fn invoke(&self, dataset: &Dataset, values: &ControlValues) -> OutputUpdate {
        OutputUpdate {
            output: self.output,
            figure: (self.handler)(dataset, values),
        }
    }
}

impl std::fmt::Debug for Binding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding")
            .field("output", &self.output)
            .field("inputs", &self.inputs)
            .finish()
    }
}

/// Ordered set of bindings, at most one per output
#[derive(Debug, Default)]
pub struct BindingRegistry {
    bindings: Vec<Binding>,
}

impl BindingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The launch dashboard's bindings:
    /// - site dropdown → success pie
    /// - site dropdown + payload slider → payload scatter
    pub fn dashboard() -> Self {
        let mut registry = Self::new();
        registry.bindings.push(Binding {
            output: OutputId::SuccessPieChart,
            inputs: vec![ControlId::SiteDropdown],
            handler: handlers::render_success_pie,
        });
        registry.bindings.push(Binding {
            output: OutputId::SuccessPayloadScatterChart,
            inputs: vec![ControlId::SiteDropdown, ControlId::PayloadSlider],
            handler: handlers::render_payload_scatter,
        });
        registry
    }

    /// Register a binding. Each output may be bound only once.
    pub fn register(
        &mut self,
        output: OutputId,
        inputs: &[ControlId],
        handler: Handler,
    ) -> Result<(), BindingError> {
        if self.bindings.iter().any(|b| b.output == output) {
            return Err(BindingError::DuplicateOutput(output));
        }

        self.bindings.push(Binding {
            output,
            inputs: inputs.to_vec(),
            handler,
        });
        Ok(())
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Re-run every binding that listens to `changed`
    pub fn dispatch(
        &self,
        dataset: &Dataset,
        values: &ControlValues,
        changed: ControlId,
    ) -> Vec<OutputUpdate> {
        self.bindings
            .iter()
            .filter(|b| b.listens_to(changed))
            .map(|b| {
                tracing::debug!(control = %changed, output = %b.output, "Dispatching binding");
                b.invoke(dataset, values)
            })
            .collect()
    }

    /// Run every binding, e.g. for the initial page render
    pub fn render_all(&self, dataset: &Dataset, values: &ControlValues) -> Vec<OutputUpdate> {
        self.bindings
            .iter()
            .map(|b| b.invoke(dataset, values))
            .collect()
    }
}

/// Errors raised by the binding layer
#[derive(Debug, Error)]
pub enum BindingError {
    #[error("Invalid value for {control}: {reason}")]
    InvalidValue { control: ControlId, reason: String },

    #[error("Output {0} is already bound")]
    DuplicateOutput(OutputId),
}
