//! Permanent redirects.
//!
//! Requests whose path exactly matches a configured source are answered with
//! `308 Permanent Redirect` before any route handler runs. The query string
//! is carried over to the destination.

use std::collections::HashMap;
use std::sync::Arc;

use ax_config::Redirect;
use axum::extract::{Request, State};
use axum::http::Uri;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Lookup table from source path to destination path.
#[derive(Debug, Default)]
pub(crate) struct RedirectTable {
    targets: HashMap<String, String>,
}

impl RedirectTable {
    /// Build the table from configured redirects.
    ///
    /// Sources are expected to be unique (checked during config validation);
    /// on duplicates the last entry wins.
    pub(crate) fn new(redirects: &[Redirect]) -> Self {
        let targets = redirects
            .iter()
            .map(|r| (r.source.clone(), r.destination.clone()))
            .collect();
        Self { targets }
    }

    /// Location to redirect `uri` to, if its path is a redirect source.
    pub(crate) fn location(&self, uri: &Uri) -> Option<String> {
        let destination = self.targets.get(uri.path())?;

        Some(match uri.query() {
            Some(query) if !query.is_empty() => {
                let separator = if destination.contains('?') { '&' } else { '?' };
                format!("{destination}{separator}{query}")
            }
            _ => destination.clone(),
        })
    }

    /// Number of configured redirects.
    pub(crate) fn len(&self) -> usize {
        self.targets.len()
    }
}

/// Answer redirect sources with 308, pass everything else through.
pub(crate) async fn redirect_middleware(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    if let Some(location) = state.redirects.location(request.uri()) {
        tracing::debug!(from = %request.uri().path(), to = %location, "Redirecting");
        return axum::response::Redirect::permanent(&location).into_response();
    }

    next.run(request).await
}
