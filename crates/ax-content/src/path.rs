//! Path sanitization for the document root.
//!
//! Two independent guards:
//!
//! 1. [`validate_segments`] rejects unsafe URL segments before any
//!    filesystem path exists.
//! 2. [`contain`] normalizes a joined candidate path and rejects it unless it
//!    is still inside the document root.

use std::path::{Component, Path, PathBuf};

use crate::error::ContentError;

/// Check URL path segments before they are joined onto the document root.
///
/// Rejects an empty segment list, and any segment that is empty, contains
/// `..`, or contains a `/` or `\` separator.
///
/// # Errors
///
/// Returns [`ContentError::PathRequired`] or [`ContentError::InvalidSegment`].
pub fn validate_segments<S: AsRef<str>>(segments: &[S]) -> Result<(), ContentError> {
    if segments.is_empty() {
        return Err(ContentError::PathRequired);
    }

    for segment in segments {
        let segment = segment.as_ref();
        if segment.is_empty() || segment.contains("..") || segment.contains(['/', '\\']) {
            return Err(ContentError::InvalidSegment {
                segment: segment.to_owned(),
            });
        }
    }

    Ok(())
}

/// Lexically normalize a path.
///
/// Drops `.` components and resolves `..` against the preceding component,
/// without touching the filesystem. `..` at the root stays at the root.
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Normalize `candidate` and require it to stay under `root`.
///
/// `root` must already be normalized. The comparison is component-wise, so
/// `/srv/docs-private` is not inside `/srv/docs`.
///
/// # Errors
///
/// Returns [`ContentError::Traversal`] if the normalized path escapes `root`.
pub fn contain(root: &Path, candidate: &Path) -> Result<PathBuf, ContentError> {
    let normalized = normalize(candidate);
    if normalized.starts_with(root) {
        Ok(normalized)
    } else {
        Err(ContentError::Traversal { path: normalized })
    }
}
