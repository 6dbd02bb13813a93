//! Callback Route
//!
//! Stateless entry into the binding layer for clients without a websocket.
//!
//! - POST /api/v1/callback - Render the outputs bound to a changed control

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{CallbackRequest, CallbackResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::reactive::{ControlChange, ControlId, ControlValues};

/// POST /api/v1/callback
///
/// Rebuilds the page's control values from the request, then dispatches
/// `changed` (or renders every output when it is absent).
pub async fn dispatch(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CallbackRequest>,
) -> ApiResult<Json<CallbackResponse>> {
    let mut values = ControlValues::initial(&state.dataset);

    if let Some(site) = req.inputs.site {
        values.apply(ControlChange::from_json(ControlId::SiteDropdown, site)?);
    }
    if let Some(payload) = req.inputs.payload {
        values.apply(ControlChange::from_json(ControlId::PayloadSlider, payload)?);
    }

    let updates = match req.changed {
        Some(control) => state.registry.dispatch(&state.dataset, &values, control),
        None => state.registry.render_all(&state.dataset, &values),
    };

    tracing::debug!(
        changed = ?req.changed,
        site = %values.site,
        range = %values.payload,
        outputs = updates.len(),
        "Callback dispatched"
    );

    Ok(Json(CallbackResponse { updates }))
}
