//! Pages API endpoint.
//!
//! Resolves a docs URL path against the navigation tree and returns the
//! matching item together with its breadcrumb trail. Unknown paths get the
//! not-found payload with navigational suggestions.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ax_nav::{Breadcrumbs, NavigationItem, path_to_slug, slug_to_path};
use serde::Serialize;

use crate::state::AppState;

/// Number of suggestions offered on the not-found page.
const SUGGESTION_LIMIT: usize = 5;

/// Response for a resolved page.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageResponse<'a> {
    /// Navigation item the path resolved to.
    item: &'a NavigationItem,
    /// Accessible label for links to this page.
    aria_label: String,
    /// Breadcrumb trail.
    breadcrumbs: Breadcrumbs,
}

/// Response for a path with no navigation item.
#[derive(Serialize)]
struct PageNotFoundResponse<'a> {
    error: &'static str,
    /// Canonical form of the requested path.
    path: String,
    breadcrumbs: Breadcrumbs,
    suggestions: Vec<Suggestion<'a>>,
}

/// Link offered on the not-found page.
#[derive(Serialize)]
struct Suggestion<'a> {
    title: &'a str,
    path: &'a str,
}

impl<'a> From<&'a NavigationItem> for Suggestion<'a> {
    fn from(item: &'a NavigationItem) -> Self {
        Self {
            title: &item.title,
            path: &item.path,
        }
    }
}

/// Handle GET /api/pages/ (root page).
pub(crate) async fn get_root_page(State(state): State<Arc<AppState>>) -> Response {
    get_page_impl("", &state)
}

/// Handle GET /api/pages/{path}.
pub(crate) async fn get_page(
    Path(path): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    get_page_impl(&path, &state)
}

/// Shared implementation for page resolution.
fn get_page_impl(path: &str, state: &AppState) -> Response {
    let slug = path_to_slug(path);
    let url_path = slug_to_path(&slug);
    let navigation = &state.navigation;

    let resolution = navigation.resolve_route(&slug);
    let breadcrumbs = navigation.breadcrumbs(&url_path);

    if let Some(item) = resolution.navigation_item {
        let response = PageResponse {
            item,
            aria_label: item.aria_label(),
            breadcrumbs,
        };
        return Json(response).into_response();
    }

    tracing::debug!(path = %url_path, "Page not found");

    let suggestions = navigation
        .suggestions(&url_path, SUGGESTION_LIMIT)
        .into_iter()
        .map(Suggestion::from)
        .collect();
    let response = PageNotFoundResponse {
        error: "Page not found",
        path: url_path,
        breadcrumbs,
        suggestions,
    };

    (StatusCode::NOT_FOUND, Json(response)).into_response()
}
