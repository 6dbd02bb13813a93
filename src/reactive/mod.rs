//! Reactive Binding Layer
//!
//! Connects page controls to chart outputs:
//!
//! - **BindingRegistry**: (inputs → handler → output) registrations
//! - **Session**: current control values of one page, applies changes
//! - **DashboardLayout**: control definitions sent to the page
//!
//! ```text
//! control change → Session::apply → BindingRegistry::dispatch
//!                → handler(dataset, values) → OutputUpdate { output, figure }
//! ```

mod binding;
mod handlers;
mod layout;
mod session;

pub use binding::{
    Binding, BindingError, BindingRegistry, ControlChange, ControlId, ControlValues, Handler,
    OutputId, OutputUpdate,
};
pub use handlers::{render_payload_scatter, render_success_pie};
pub use layout::{
    DashboardLayout, DropdownOption, DropdownSpec, RangeSliderSpec, DASHBOARD_TITLE, SLIDER_MAX,
    SLIDER_MIN, SLIDER_STEP,
};
pub use session::Session;
