//! Dashboard Queries
//!
//! Pure functions of (dataset, control values). Nothing here mutates the
//! dataset, and a query that matches no launches returns an empty result
//! rather than an error.
//!
//! # Pipeline
//!
//! ```text
//! site dropdown ──────────────► success_counts ───► pie figure
//! site dropdown + payload range ► filter_by_payload ─► scatter figure
//! ```

pub mod aggregate;
pub mod payload;
pub mod site;

pub use aggregate::{success_counts, OutcomeCount, SiteCount, SuccessCounts};
pub use payload::{filter_by_payload, PayloadRange};
pub use site::{SiteSelection, ALL_SITES, ALL_SITES_LABEL};
