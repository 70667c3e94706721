//! Markdown API endpoint.
//!
//! Serves raw markdown from the document root. The path is taken from the
//! raw request URI and percent-decoded one segment at a time, so an encoded
//! separator (`%2F`) stays inside its segment and is rejected.

use std::borrow::Cow;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use md5::{Digest, Md5};
use percent_encoding::percent_decode_str;

use crate::error::ServerError;
use crate::state::AppState;

/// Mount point of the markdown routes.
pub(crate) const ROUTE_PREFIX: &str = "/api/markdown";

const CONTENT_TYPE: &str = "text/markdown; charset=utf-8";

const CACHE_CONTROL: &str = "public, s-maxage=3600, stale-while-revalidate=86400";

/// Handle GET /api/markdown, /api/markdown/ and /api/markdown/{path}.
pub(crate) async fn get_markdown(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    let segments = request_segments(uri.path())?;
    let content = state.documents.read(&segments).await?;

    let etag = compute_etag(&state.version, &content);

    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return Ok((StatusCode::NOT_MODIFIED, [(header::ETAG, etag)]).into_response());
    }

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE)),
            (header::CACHE_CONTROL, HeaderValue::from_static(CACHE_CONTROL)),
        ],
        [(header::ETAG, etag)],
        content,
    )
        .into_response())
}

/// Split the raw request path into decoded segments below [`ROUTE_PREFIX`].
///
/// Returns no segments for the bare prefix. Empty segments are kept so the
/// document root can reject them.
fn request_segments(path: &str) -> Result<Vec<String>, ServerError> {
    let rest = path.strip_prefix(ROUTE_PREFIX).unwrap_or(path);
    let rest = rest.strip_prefix('/').unwrap_or(rest);
    if rest.is_empty() {
        return Ok(Vec::new());
    }

    rest.split('/')
        .map(|segment| {
            percent_decode_str(segment)
                .decode_utf8()
                .map(Cow::into_owned)
                .map_err(|_| ServerError::InvalidEncoding {
                    segment: segment.to_owned(),
                })
        })
        .collect()
}

/// Compute `ETag` from version and content.
///
/// Uses MD5 hash truncated to 64 bits (16 hex chars).
fn compute_etag(version: &str, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{content}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}
