//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;

use ax_content::DocumentRoot;
use ax_nav::Navigation;

use crate::middleware::redirects::RedirectTable;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Navigation tree, loaded once at startup.
    pub(crate) navigation: Arc<Navigation>,
    /// Directory markdown is served from.
    pub(crate) documents: DocumentRoot,
    /// Permanent redirects checked before routing.
    pub(crate) redirects: RedirectTable,
    /// Application version for `ETag` computation.
    pub(crate) version: String,
}
