//! Error types for the HTTP server.
//!
//! Response bodies carry a fixed message only. Paths and underlying errors
//! go to the log, never to the client.

use ax_content::{ContentError, ContentErrorKind};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// Document root rejected or failed the read.
    #[error(transparent)]
    Content(#[from] ContentError),

    /// A request path segment is not valid percent-encoded UTF-8.
    #[error("Invalid percent-encoding in segment {segment:?}")]
    InvalidEncoding {
        /// Raw segment as received.
        segment: String,
    },
}

impl ServerError {
    /// Status code and client-facing message.
    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            Self::InvalidEncoding { .. } => {
                (StatusCode::BAD_REQUEST, "Invalid path characters detected")
            }
            Self::Content(err) => match err.kind() {
                ContentErrorKind::PathRequired => (StatusCode::BAD_REQUEST, "Path is required"),
                ContentErrorKind::InvalidPath => {
                    (StatusCode::BAD_REQUEST, "Invalid path characters detected")
                }
                ContentErrorKind::Traversal => (StatusCode::BAD_REQUEST, "Path traversal detected"),
                ContentErrorKind::NotFound => (StatusCode::NOT_FOUND, "File not found"),
                _ => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
            },
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        if status.is_server_error() {
            tracing::error!(error = %self, "Failed to read markdown");
        } else if status == StatusCode::NOT_FOUND {
            tracing::debug!(error = %self, "Markdown not found");
        } else {
            tracing::warn!(error = %self, "Rejected markdown request");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::*;

    fn read_error(kind: io::ErrorKind) -> ServerError {
        ServerError::Content(ContentError::Read {
            path: PathBuf::from("/srv/docs/secret.md"),
            source: io::Error::from(kind),
        })
    }

    #[test]
    fn test_status_for_rejections() {
        let cases = [
            (
                ServerError::Content(ContentError::PathRequired),
                StatusCode::BAD_REQUEST,
                "Path is required",
            ),
            (
                ServerError::Content(ContentError::InvalidSegment {
                    segment: "..".to_owned(),
                }),
                StatusCode::BAD_REQUEST,
                "Invalid path characters detected",
            ),
            (
                ServerError::InvalidEncoding {
                    segment: "%FF".to_owned(),
                },
                StatusCode::BAD_REQUEST,
                "Invalid path characters detected",
            ),
            (
                ServerError::Content(ContentError::Traversal {
                    path: PathBuf::from("/etc"),
                }),
                StatusCode::BAD_REQUEST,
                "Path traversal detected",
            ),
        ];

        for (error, status, message) in cases {
            assert_eq!(error.status_and_message(), (status, message));
        }
    }

    #[test]
    fn test_status_for_read_failures() {
        assert_eq!(
            read_error(io::ErrorKind::NotFound).status_and_message(),
            (StatusCode::NOT_FOUND, "File not found")
        );
        assert_eq!(
            read_error(io::ErrorKind::PermissionDenied).status_and_message(),
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        );
    }

    #[test]
    fn test_response_body_hides_path() {
        let response = read_error(io::ErrorKind::PermissionDenied).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );
    }
}
