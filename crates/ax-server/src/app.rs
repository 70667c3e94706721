//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::middleware;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::{redirects, security};
use crate::state::AppState;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/api/markdown", get(handlers::markdown::get_markdown))
        .route("/api/markdown/", get(handlers::markdown::get_markdown))
        .route("/api/markdown/{*path}", get(handlers::markdown::get_markdown))
        .route("/api/navigation", get(handlers::navigation::get_navigation))
        .route("/api/pages/", get(handlers::pages::get_root_page))
        .route("/api/pages/{*path}", get(handlers::pages::get_page))
        .route("/api/routes", get(handlers::routes::get_routes));

    Router::new()
        .merge(api_routes)
        .layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            redirects::redirect_middleware,
        ))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use ax_config::Redirect;
    use ax_content::DocumentRoot;
    use ax_nav::Navigation;
    use axum::body::Body;
    use axum::http::{Request, Response, StatusCode, header};
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::middleware::redirects::RedirectTable;

    struct TestApp {
        router: Router,
        _docs: tempfile::TempDir,
    }

    fn create_test_app() -> TestApp {
        let docs = tempfile::tempdir().unwrap();
        fs::create_dir_all(docs.path().join("components")).unwrap();
        fs::write(docs.path().join("introduction.md"), "# Introduction\n").unwrap();
        fs::write(docs.path().join("components/button.md"), "# Button\n").unwrap();

        let state = Arc::new(AppState {
            navigation: Arc::new(Navigation::builtin().unwrap()),
            documents: DocumentRoot::new(docs.path()).unwrap(),
            redirects: RedirectTable::new(&[Redirect {
                source: "/docs/button".to_owned(),
                destination: "/docs/components/button".to_owned(),
            }]),
            version: "1.0.0".to_owned(),
        });

        TestApp {
            router: create_router(state),
            _docs: docs,
        }
    }

    async fn get(app: &TestApp, uri: &str) -> Response<Body> {
        app.router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(response: Response<Body>) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn body_json(response: Response<Body>) -> Value {
        serde_json::from_str(&body_text(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_markdown_served_with_headers() {
        let app = create_test_app();

        let response = get(&app, "/api/markdown/introduction.md").await;

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers[header::CONTENT_TYPE], "text/markdown; charset=utf-8");
        assert_eq!(
            headers[header::CACHE_CONTROL],
            "public, s-maxage=3600, stale-while-revalidate=86400"
        );
        assert!(headers.contains_key(header::ETAG));
        assert_eq!(headers["x-content-type-options"], "nosniff");
        assert_eq!(body_text(response).await, "# Introduction\n");
    }

    #[tokio::test]
    async fn test_markdown_extension_fallback() {
        let app = create_test_app();

        let response = get(&app, "/api/markdown/components/button").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "# Button\n");
    }

    #[tokio::test]
    async fn test_markdown_not_modified() {
        let app = create_test_app();
        let first = get(&app, "/api/markdown/introduction.md").await;
        let etag = first.headers()[header::ETAG].clone();

        let response = app
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/markdown/introduction.md")
                    .header(header::IF_NONE_MATCH, etag)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_MODIFIED);
        assert!(body_text(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_markdown_errors() {
        let app = create_test_app();
        let cases = [
            ("/api/markdown", StatusCode::BAD_REQUEST, "Path is required"),
            ("/api/markdown/", StatusCode::BAD_REQUEST, "Path is required"),
            (
                "/api/markdown/../secret.md",
                StatusCode::BAD_REQUEST,
                "Invalid path characters detected",
            ),
            (
                "/api/markdown/%2e%2e/secret.md",
                StatusCode::BAD_REQUEST,
                "Invalid path characters detected",
            ),
            (
                "/api/markdown/components%2Fbutton.md",
                StatusCode::BAD_REQUEST,
                "Invalid path characters detected",
            ),
            (
                "/api/markdown/components//button.md",
                StatusCode::BAD_REQUEST,
                "Invalid path characters detected",
            ),
            ("/api/markdown/missing", StatusCode::NOT_FOUND, "File not found"),
            (
                "/api/markdown/components",
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
            ),
        ];

        for (uri, status, message) in cases {
            let response = get(&app, uri).await;

            assert_eq!(response.status(), status, "{uri}");
            assert_eq!(
                body_json(response).await,
                serde_json::json!({ "error": message }),
                "{uri}"
            );
        }
    }

    #[tokio::test]
    async fn test_page_resolved() {
        let app = create_test_app();

        let response = get(&app, "/api/pages/docs/components/button").await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["item"]["path"], "/docs/components/button");
        assert_eq!(json["ariaLabel"], "Button, Trigger actions and events");
        assert_eq!(json["breadcrumbs"]["origin"], "navigation");
        let labels: Vec<&str> = json["breadcrumbs"]["steps"]
            .as_array()
            .unwrap()
            .iter()
            .map(|step| step["label"].as_str().unwrap())
            .collect();
        assert_eq!(labels, vec!["Home", "Components", "Button"]);
    }

    #[tokio::test]
    async fn test_page_not_found_with_suggestions() {
        let app = create_test_app();

        let response = get(&app, "/api/pages/docs/components/slider").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Page not found");
        assert_eq!(json["path"], "/docs/components/slider");
        let suggestions = json["suggestions"].as_array().unwrap();
        assert!(!suggestions.is_empty());
        assert!(
            suggestions
                .iter()
                .all(|s| s["path"].as_str().unwrap().starts_with("/docs/components/"))
        );
    }

    #[tokio::test]
    async fn test_root_page_is_not_a_navigation_item() {
        let app = create_test_app();

        let response = get(&app, "/api/pages/").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["path"], "/");
        assert_eq!(json["breadcrumbs"]["origin"], "root");
    }

    #[tokio::test]
    async fn test_navigation() {
        let app = create_test_app();

        let response = get(&app, "/api/navigation").await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let sections = json["sections"].as_array().unwrap();
        assert_eq!(sections[0]["id"], "getting-started");
        assert_eq!(sections[0]["items"][0]["id"], "introduction");
        assert!(sections[0]["items"][0]["ariaLabel"].is_string());
    }

    #[tokio::test]
    async fn test_routes() {
        let app = create_test_app();

        let response = get(&app, "/api/routes").await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let paths = json["paths"].as_array().unwrap();
        assert!(paths.contains(&Value::from("/docs/components/button")));
        assert_eq!(
            paths.len(),
            Navigation::builtin().unwrap().all_route_paths().len()
        );
    }

    #[tokio::test]
    async fn test_redirect_before_routing() {
        let app = create_test_app();

        let response = get(&app, "/docs/button?tab=props").await;

        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(
            response.headers()[header::LOCATION],
            "/docs/components/button?tab=props"
        );
        assert_eq!(response.headers()["x-frame-options"], "DENY");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let app = create_test_app();

        let response = get(&app, "/nope").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
