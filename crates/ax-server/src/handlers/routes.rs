//! Routes API endpoint.
//!
//! Lists every page path in the navigation tree, for sitemaps and static
//! path generation.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

/// Response for GET /api/routes.
#[derive(Serialize)]
pub(crate) struct RoutesResponse {
    /// Item paths in navigation order.
    paths: Vec<String>,
}

/// Handle GET /api/routes.
pub(crate) async fn get_routes(State(state): State<Arc<AppState>>) -> Json<RoutesResponse> {
    Json(RoutesResponse {
        paths: state.navigation.all_route_paths(),
    })
}
