//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for the actual availability computation.

use axum::{extract::State, Json};
use tracing::debug;

use super::dto::{BuildingResult, GeoPoint, HealthResponse, LocationRequest};
use super::error::AppError;
use super::state::AppState;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint reporting the currently loaded catalog.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let catalog = state.catalog.current();

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        catalog_checksum: catalog.checksum.clone(),
        buildings: catalog.buildings.len(),
    }))
}

// =============================================================================
// Open Classrooms
// =============================================================================

/// GET /api/open-classrooms
///
/// Current availability for every building, in catalog order, without
/// distances.
pub async fn get_open_classrooms(
    State(state): State<AppState>,
) -> HandlerResult<Vec<BuildingResult>> {
    compute_availability(&state, None)
}

/// POST /api/open-classrooms
///
/// Current availability ranked by distance from the caller position in the
/// request body.
pub async fn post_open_classrooms(
    State(state): State<AppState>,
    Json(request): Json<LocationRequest>,
) -> HandlerResult<Vec<BuildingResult>> {
    let caller = request.into_position().map_err(AppError::BadRequest)?;
    compute_availability(&state, caller)
}

/// Shared computation behind both endpoints: snapshot the catalog, resolve
/// "now" in the configured zone, aggregate, then rank.
fn compute_availability(
    state: &AppState,
    caller: Option<GeoPoint>,
) -> HandlerResult<Vec<BuildingResult>> {
    let catalog = state.catalog.current();
    let (now, weekday) = state.clock.now_parts();
    let weekday_tag = state.weekday_tags.tag(weekday);

    debug!(%now, weekday_tag, "computing availability");

    let mut results = services::aggregate(&catalog, now, weekday_tag);
    services::rank_by_distance(&mut results, caller);

    Ok(Json(results))
}
