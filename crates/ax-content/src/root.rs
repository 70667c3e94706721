//! Document root: the directory markdown is served from.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::ContentError;
use crate::path::{contain, normalize, validate_segments};

/// Extension tried when a path without it is not readable.
const MARKDOWN_SUFFIX: &str = ".md";

/// Read-only view of a directory of markdown documents.
///
/// All reads are confined to the root: segments are sanitized and every
/// candidate path is normalized and re-checked against the root before the
/// filesystem is touched.
#[derive(Clone, Debug)]
pub struct DocumentRoot {
    root: PathBuf,
}

impl DocumentRoot {
    /// Create a document root.
    ///
    /// The path is made absolute (against the current directory) and
    /// normalized. It does not have to exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn new(root: impl AsRef<Path>) -> io::Result<Self> {
        let absolute = std::path::absolute(root)?;
        Ok(Self {
            root: normalize(&absolute),
        })
    }

    /// Absolute, normalized root directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Map URL segments to a contained filesystem path.
    ///
    /// # Errors
    ///
    /// Returns an error if the segments are unsafe or the joined path
    /// escapes the root.
    pub fn resolve<S: AsRef<str>>(&self, segments: &[S]) -> Result<PathBuf, ContentError> {
        validate_segments(segments)?;

        let mut candidate = self.root.clone();
        for segment in segments {
            candidate.push(segment.as_ref());
        }

        contain(&self.root, &candidate)
    }

    /// Read a markdown document as UTF-8 text.
    ///
    /// Tries the exact path first. If that fails and the path does not end in
    /// `.md`, tries once more with `.md` appended. When both attempts fail the
    /// error of the first attempt is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the segments are rejected or no attempt succeeds.
    pub async fn read<S: AsRef<str>>(&self, segments: &[S]) -> Result<String, ContentError> {
        let candidate = self.resolve(segments)?;

        let first_error = match tokio::fs::read_to_string(&candidate).await {
            Ok(content) => return Ok(content),
            Err(err) => err,
        };

        if let Some(fallback) = self.markdown_fallback(&candidate) {
            match tokio::fs::read_to_string(&fallback).await {
                Ok(content) => {
                    tracing::debug!(
                        path = %fallback.display(),
                        "Served markdown via extension fallback"
                    );
                    return Ok(content);
                }
                Err(err) => {
                    tracing::debug!(
                        path = %fallback.display(),
                        error = %err,
                        "Extension fallback failed"
                    );
                }
            }
        }

        Err(ContentError::Read {
            path: candidate,
            source: first_error,
        })
    }

    /// Candidate with `.md` appended, if it lacks the suffix and stays contained.
    fn markdown_fallback(&self, candidate: &Path) -> Option<PathBuf> {
        let has_suffix = candidate
            .file_name()
            .is_some_and(|name| name.to_string_lossy().ends_with(MARKDOWN_SUFFIX));
        if has_suffix {
            return None;
        }

        let mut suffixed = OsString::from(candidate.as_os_str());
        suffixed.push(MARKDOWN_SUFFIX);
        contain(&self.root, Path::new(&suffixed)).ok()
    }
}
