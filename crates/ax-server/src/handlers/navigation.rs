//! Navigation API endpoint.
//!
//! Returns the navigation tree for the sidebar, with a precomputed
//! accessible label on every item.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use ax_nav::{NavigationItem, NavigationSection};
use serde::Serialize;

use crate::state::AppState;

/// Response for GET /api/navigation.
#[derive(Serialize)]
struct NavigationResponse<'a> {
    sections: Vec<SectionResponse<'a>>,
}

#[derive(Serialize)]
struct SectionResponse<'a> {
    id: &'a str,
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<&'a str>,
    items: Vec<ItemResponse<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ItemResponse<'a> {
    #[serde(flatten)]
    item: &'a NavigationItem,
    aria_label: String,
}

impl<'a> From<&'a NavigationSection> for SectionResponse<'a> {
    fn from(section: &'a NavigationSection) -> Self {
        Self {
            id: &section.id,
            title: &section.title,
            path: section.path.as_deref(),
            items: section
                .items
                .iter()
                .map(|item| ItemResponse {
                    item,
                    aria_label: item.aria_label(),
                })
                .collect(),
        }
    }
}

/// Handle GET /api/navigation.
pub(crate) async fn get_navigation(State(state): State<Arc<AppState>>) -> Response {
    let response = NavigationResponse {
        sections: state
            .navigation
            .sections()
            .iter()
            .map(SectionResponse::from)
            .collect(),
    };
    Json(response).into_response()
}

#[cfg(test)]
mod tests {
    use ax_nav::Badge;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_section_response_serialization() {
        let section = NavigationSection {
            id: "layouts".to_owned(),
            title: "Layouts".to_owned(),
            path: None,
            items: vec![NavigationItem {
                id: "masonry-grid".to_owned(),
                title: "Masonry Grid".to_owned(),
                path: "/docs/layouts/masonry-grid".to_owned(),
                description: None,
                badge: Some(Badge {
                    text: "New".to_owned(),
                }),
            }],
        };

        let json = serde_json::to_value(SectionResponse::from(&section)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "layouts",
                "title": "Layouts",
                "items": [{
                    "id": "masonry-grid",
                    "title": "Masonry Grid",
                    "path": "/docs/layouts/masonry-grid",
                    "badge": {"text": "New"},
                    "ariaLabel": "Masonry Grid, New"
                }]
            })
        );
    }
}
