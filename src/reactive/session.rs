//! Dashboard Session
//!
//! Control state for one connected page. Events are applied one at a time;
//! each handler runs to completion before the next change is accepted.

use std::sync::Arc;

use crate::dataset::Dataset;

use super::binding::{BindingRegistry, ControlChange, ControlValues, OutputUpdate};

pub struct Session {
    dataset: Arc<Dataset>,
    registry: Arc<BindingRegistry>,
    values: ControlValues,
}

impl Session {
    /// Start a session with the initial control values
    pub fn new(dataset: Arc<Dataset>, registry: Arc<BindingRegistry>) -> Self {
        let values = ControlValues::initial(&dataset);
        Self {
            dataset,
            registry,
            values,
        }
    }

    pub fn values(&self) -> &ControlValues {
        &self.values
    }

    /// Figures for every bound output at the current values
    pub fn render(&self) -> Vec<OutputUpdate> {
        self.registry.render_all(&self.dataset, &self.values)
    }

    /// Apply a control change and re-run the affected bindings.
    ///
    /// Setting a control to its current value produces no updates.
    pub fn apply(&mut self, change: ControlChange) -> Vec<OutputUpdate> {
        let control = change.control();
        if !self.values.apply(change) {
            tracing::trace!(control = %control, "Control value unchanged");
            return Vec::new();
        }

        self.registry.dispatch(&self.dataset, &self.values, control)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{LaunchRecord, OutcomeClass};
    use crate::query::{PayloadRange, SiteSelection};
    use crate::reactive::OutputId;

    fn session() -> Session {
        let dataset = Dataset::from_records(vec![
            LaunchRecord::new("A", 100.0, OutcomeClass::Success, "FT"),
            LaunchRecord::new("A", 4000.0, OutcomeClass::Failure, "FT"),
            LaunchRecord::new("B", 8000.0, OutcomeClass::Success, "B5"),
        ])
        .unwrap();
        Session::new(Arc::new(dataset), Arc::new(BindingRegistry::dashboard()))
    }

    #[test]
    fn test_initial_render() {
        let session = session();
        let updates = session.render();

        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0].output, OutputId::SuccessPieChart);
        assert_eq!(updates[0].figure.point_count(), 2);
        assert_eq!(updates[1].figure.point_count(), 3);
    }

    #[test]
    fn test_site_then_range() {
        let mut session = session();

        let updates = session.apply(ControlChange::Site(SiteSelection::from("A")));
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[1].figure.point_count(), 2);

        let updates = session.apply(ControlChange::Payload(PayloadRange::new(0.0, 1000.0)));
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].output, OutputId::SuccessPayloadScatterChart);
        assert_eq!(updates[0].figure.point_count(), 1);
        assert_eq!(session.values().site, SiteSelection::from("A"));
    }

    #[test]
    fn test_unchanged_value_is_noop() {
        let mut session = session();
        assert!(session
            .apply(ControlChange::Site(SiteSelection::All))
            .is_empty());
    }

    #[test]
    fn test_repeated_render_is_identical() {
        let mut session = session();
        session.apply(ControlChange::Site(SiteSelection::from("B")));
        assert_eq!(session.render(), session.render());
    }
}
