//! Dashboard Routes
//!
//! Page and dataset endpoints.
//!
//! - GET / - Dashboard page
//! - GET /api/v1/layout - Control definitions
//! - GET /api/v1/sites - Distinct launch sites
//! - GET /api/v1/sites/:site - Launch counts for one site
//! - GET /api/v1/summary - Dataset summary
//! - GET /api/v1/launches?site=&low=&high= - Filtered launch records

use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use std::sync::Arc;

use crate::api::dto::{ChartParams, LaunchesResponse, SitesResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::dataset::{DatasetStats, SiteStats};
use crate::query::filter_by_payload;
use crate::reactive::DashboardLayout;

const INDEX_HTML: &str = include_str!("../../../static/index.html");

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /api/v1/layout
pub async fn layout(State(state): State<Arc<AppState>>) -> Json<DashboardLayout> {
    Json(DashboardLayout::for_dataset(&state.dataset))
}

/// GET /api/v1/sites
pub async fn list_sites(State(state): State<Arc<AppState>>) -> Json<SitesResponse> {
    let sites = state.dataset.sites().to_vec();
    Json(SitesResponse {
        total: sites.len(),
        sites,
    })
}

/// GET /api/v1/sites/:site
pub async fn get_site(
    State(state): State<Arc<AppState>>,
    Path(site): Path<String>,
) -> ApiResult<Json<SiteStats>> {
    state
        .dataset
        .stats()
        .sites
        .into_iter()
        .find(|s| s.site == site)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Launch site '{}' not found", site)))
}

/// GET /api/v1/summary
pub async fn summary(State(state): State<Arc<AppState>>) -> Json<DatasetStats> {
    Json(state.dataset.stats())
}

/// GET /api/v1/launches
///
/// Same selection as the scatter chart, returned as records.
pub async fn list_launches(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ChartParams>,
) -> ApiResult<Json<LaunchesResponse>> {
    let site = params.site();
    let range = params.range(state.dataset.payload_bounds())?;

    let launches: Vec<_> = filter_by_payload(&state.dataset, range, &site)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(LaunchesResponse {
        site,
        range,
        total: launches.len(),
        launches,
    }))
}
