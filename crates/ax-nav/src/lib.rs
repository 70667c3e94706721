//! Navigation tree, route mapping and breadcrumbs for the Atomix docs server.
//!
//! This crate provides:
//! - [`Navigation`]: the validated, read-only navigation tree
//! - Route mapping between URL paths and slugs ([`path_to_slug`], [`slug_to_path`])
//!   and slug resolution ([`Navigation::resolve_route`])
//! - Breadcrumb trails ([`Navigation::breadcrumbs`])
//! - Accessible labels ([`aria_label`])
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use ax_nav::{Navigation, TrailOrigin, path_to_slug};
//!
//! let nav = Navigation::builtin()?;
//!
//! let resolution = nav.resolve_route(&path_to_slug("/docs/components/button"));
//! assert!(resolution.is_valid);
//!
//! let trail = nav.breadcrumbs("/docs/components/button");
//! assert_eq!(trail.origin, TrailOrigin::Navigation);
//! # Ok(())
//! # }
//! ```

mod aria;
mod breadcrumbs;
mod navigation;
mod route;

pub use aria::{AriaParts, aria_label};
pub use breadcrumbs::{BreadcrumbStep, Breadcrumbs, TrailOrigin, humanize};
pub use navigation::{Badge, Navigation, NavigationError, NavigationItem, NavigationSection};
pub use route::{RouteResolution, path_to_slug, slug_to_path};
