//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use super::error::{ApiError, ApiResult};
use crate::dataset::{LaunchRecord, PayloadBounds};
use crate::query::{PayloadRange, SiteSelection, ALL_SITES};
use crate::reactive::{ControlId, OutputUpdate};

// ============================================
// CHART DTOs
// ============================================

/// Query parameters shared by the chart and launch endpoints
#[derive(Debug, Deserialize)]
pub struct ChartParams {
    /// Site name or "ALL" (default)
    #[serde(default = "default_site")]
    pub site: String,
    /// Lower payload bound (kg), defaults to the observed minimum
    #[serde(default)]
    pub low: Option<f64>,
    /// Upper payload bound (kg), defaults to the observed maximum
    #[serde(default)]
    pub high: Option<f64>,
}

fn default_site() -> String {
    ALL_SITES.to_string()
}

impl ChartParams {
    pub fn site(&self) -> SiteSelection {
        SiteSelection::parse(&self.site)
    }

    /// Requested range, missing ends filled from the dataset bounds
    ///
    /// Bounds must be finite; `NaN` would silently match nothing.
    pub fn range(&self, bounds: PayloadBounds) -> ApiResult<PayloadRange> {
        for (name, value) in [("low", self.low), ("high", self.high)] {
            if let Some(v) = value.filter(|v| !v.is_finite()) {
                return Err(ApiError::Validation(format!(
                    "'{}' must be a finite payload mass, got {}",
                    name, v
                )));
            }
        }

        Ok(PayloadRange::new(
            self.low.unwrap_or(bounds.min),
            self.high.unwrap_or(bounds.max),
        ))
    }
}

/// Filtered launches
#[derive(Debug, Serialize)]
pub struct LaunchesResponse {
    pub site: SiteSelection,
    pub range: PayloadRange,
    pub total: usize,
    pub launches: Vec<LaunchRecord>,
}

// ============================================
// SITE DTOs
// ============================================

/// List sites response
#[derive(Debug, Serialize)]
pub struct SitesResponse {
    /// Sites in first-seen order
    pub sites: Vec<String>,
    /// Total count
    pub total: usize,
}

// ============================================
// CALLBACK DTOs
// ============================================

/// Stateless callback request
///
/// Carries the page's current control values. Omitted controls take their
/// initial values.
#[derive(Debug, Default, Deserialize)]
pub struct CallbackRequest {
    /// Control that changed; every output is rendered when absent
    #[serde(default)]
    pub changed: Option<ControlId>,
    #[serde(default)]
    pub inputs: CallbackInputs,
}

/// Raw control values, decoded by the binding layer
#[derive(Debug, Default, Deserialize)]
pub struct CallbackInputs {
    #[serde(rename = "site-dropdown", default)]
    pub site: Option<serde_json::Value>,
    #[serde(rename = "payload-slider", default)]
    pub payload: Option<serde_json::Value>,
}

/// Callback response
#[derive(Debug, Serialize)]
pub struct CallbackResponse {
    pub updates: Vec<OutputUpdate>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: healthy, degraded
    pub status: String,
    /// Number of launch records loaded
    pub records: usize,
    /// Number of distinct sites
    pub sites: usize,
    /// Active websocket sessions
    pub ws_connections: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: PayloadBounds = PayloadBounds {
        min: 0.0,
        max: 9600.0,
    };

    fn params(low: Option<f64>, high: Option<f64>) -> ChartParams {
        ChartParams {
            site: default_site(),
            low,
            high,
        }
    }

    #[test]
    fn test_range_defaults_to_bounds() {
        let range = params(None, Some(5000.0)).range(BOUNDS).unwrap();
        assert_eq!(range, PayloadRange::new(0.0, 5000.0));
    }

    #[test]
    fn test_range_rejects_non_finite_bounds() {
        assert!(matches!(
            params(Some(f64::NAN), None).range(BOUNDS),
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(
            params(None, Some(f64::INFINITY)).range(BOUNDS),
            Err(ApiError::Validation(_))
        ));
    }
}
