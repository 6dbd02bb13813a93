//! # Launchdash
//!
//! Launch Records Dashboard - an interactive web dashboard over a table of
//! historical rocket launches.
//!
//! ## Features
//!
//! - **Success pie**: successful launches per site, or success vs. failure
//!   for one site
//! - **Payload scatter**: payload mass vs. outcome, coloured by booster
//!   version category, filtered by a payload range
//! - **Reactive bindings**: control changes re-render only the bound charts
//! - **Live sessions**: websocket transport with an HTTP callback fallback
//!
//! ## Modules
//!
//! - [`dataset`]: CSV loading and the immutable launch table
//! - [`query`]: Site aggregation and payload filtering
//! - [`chart`]: Figure specifications (Plotly-compatible JSON)
//! - [`reactive`]: Control → chart bindings and per-page sessions
//! - [`api`]: HTTP server with Axum
//! - [`websocket`]: Live dashboard sessions
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use launchdash::dataset::Dataset;
//! use launchdash::query::{filter_by_payload, success_counts, PayloadRange, SiteSelection};
//! use launchdash::chart;
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Dataset::load(Path::new("data/spacex_launch_dash.csv"))?;
//!
//!     let site = SiteSelection::parse("KSC LC-39A");
//!     let pie = chart::success_pie(&success_counts(&dataset, &site), &site);
//!
//!     let heavy = filter_by_payload(&dataset, PayloadRange::new(5000.0, 10000.0), &site);
//!     let scatter = chart::payload_scatter(&heavy, &site);
//!
//!     println!("{}: {} slices, {} points", site, pie.point_count(), scatter.point_count());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod chart;
pub mod config;
pub mod dataset;
pub mod query;
pub mod reactive;
pub mod websocket;

// Re-export top-level types for convenience
pub use dataset::{
    Dataset, DatasetError, DatasetResult, DatasetStats, LaunchRecord, OutcomeClass, PayloadBounds,
};

pub use query::{filter_by_payload, success_counts, PayloadRange, SiteSelection, SuccessCounts};

pub use chart::{payload_scatter, success_pie, Figure, Trace};

pub use reactive::{
    BindingError, BindingRegistry, ControlChange, ControlId, ControlValues, DashboardLayout,
    OutputId, OutputUpdate, Session,
};

pub use api::{build_router, serve, ApiError, AppState};

pub use websocket::{websocket_handler, ClientMessage, ConnectionHub, ServerMessage};

pub use config::{Config, ConfigError, LoggingConfig};
