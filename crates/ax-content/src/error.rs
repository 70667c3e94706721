//! Content error types.

use std::io;
use std::path::PathBuf;

/// Semantic error categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContentErrorKind {
    /// No path segments were given.
    PathRequired,
    /// A segment is empty or contains `..` or a path separator.
    InvalidPath,
    /// The normalized path escapes the document root.
    Traversal,
    /// The file does not exist.
    NotFound,
    /// Any other read failure (permissions, invalid UTF-8, I/O).
    Other,
}

/// Error reading a document from the document root.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// No path segments were given.
    #[error("Path is required")]
    PathRequired,

    /// A segment failed sanitization.
    #[error("Invalid path segment: {segment:?}")]
    InvalidSegment {
        /// Offending segment.
        segment: String,
    },

    /// The normalized path escapes the document root.
    #[error("Path escapes document root: {}", path.display())]
    Traversal {
        /// Normalized candidate path.
        path: PathBuf,
    },

    /// Reading the file failed.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// Candidate path of the first read attempt.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

impl ContentError {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ContentErrorKind {
        match self {
            Self::PathRequired => ContentErrorKind::PathRequired,
            Self::InvalidSegment { .. } => ContentErrorKind::InvalidPath,
            Self::Traversal { .. } => ContentErrorKind::Traversal,
            Self::Read { source, .. } => match source.kind() {
                io::ErrorKind::NotFound => ContentErrorKind::NotFound,
                _ => ContentErrorKind::Other,
            },
        }
    }
}
