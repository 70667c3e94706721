//! Read-only markdown document root for the Atomix docs server.
//!
//! Maps URL path segments to files under a fixed directory and reads them as
//! UTF-8 text. Traversal is blocked twice:
//!
//! - [`validate_segments`] rejects empty segments, `..`, and separators
//!   before a filesystem path is built;
//! - [`contain`] normalizes the joined path and checks it is still under the
//!   root, catching anything the segment filter cannot see.
//!
//! # Quick Start
//!
//! ```no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use ax_content::DocumentRoot;
//!
//! let root = DocumentRoot::new("content")?;
//!
//! // Reads content/getting-started/introduction.md via the `.md` fallback
//! let markdown = root.read(&["getting-started", "introduction"]).await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod path;
mod root;

pub use error::{ContentError, ContentErrorKind};
pub use path::{contain, normalize, validate_segments};
pub use root::DocumentRoot;
