//! Chart Routes
//!
//! Direct figure endpoints, one per dashboard output.
//!
//! - GET /api/v1/charts/success-pie?site= - Success counts pie
//! - GET /api/v1/charts/payload-scatter?site=&low=&high= - Payload vs. outcome scatter

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::ChartParams;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::chart::Figure;
use crate::reactive::{render_payload_scatter, render_success_pie, ControlValues};

/// GET /api/v1/charts/success-pie
///
/// Unknown sites yield an empty pie, not an error.
pub async fn success_pie(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ChartParams>,
) -> ApiResult<Json<Figure>> {
    let values = control_values(&state, &params)?;
    Ok(Json(render_success_pie(&state.dataset, &values)))
}

/// GET /api/v1/charts/payload-scatter
///
/// Missing range ends default to the observed payload bounds.
pub async fn payload_scatter(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ChartParams>,
) -> ApiResult<Json<Figure>> {
    let values = control_values(&state, &params)?;
    Ok(Json(render_payload_scatter(&state.dataset, &values)))
}

fn control_values(state: &AppState, params: &ChartParams) -> ApiResult<ControlValues> {
    Ok(ControlValues {
        site: params.site(),
        payload: params.range(state.dataset.payload_bounds())?,
    })
}
