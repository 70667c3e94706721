//! Route mapping between URL paths, slugs and navigation items.
//!
//! A slug is the ordered list of non-empty path segments:
//! `"/docs/components/button"` ⇄ `["docs", "components", "button"]`.

use serde::Serialize;

use crate::navigation::{Navigation, NavigationItem};

/// Split a URL path into slug segments.
///
/// Empty segments are dropped, so leading, trailing and doubled slashes are
/// tolerated. `"/"` yields an empty slug.
#[must_use]
pub fn path_to_slug(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Join slug segments into an absolute URL path.
///
/// An empty slug yields `"/"`.
#[must_use]
pub fn slug_to_path<S: AsRef<str>>(slug: &[S]) -> String {
    let mut path = String::new();
    for segment in slug {
        path.push('/');
        path.push_str(segment.as_ref());
    }
    if path.is_empty() {
        path.push('/');
    }
    path
}

/// Outcome of resolving a slug against the navigation tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResolution<'a> {
    /// True when the slug names a navigation item.
    pub is_valid: bool,
    /// The matched item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation_item: Option<&'a NavigationItem>,
}

impl<'a> RouteResolution<'a> {
    fn from_item(item: Option<&'a NavigationItem>) -> Self {
        Self {
            is_valid: item.is_some(),
            navigation_item: item,
        }
    }
}

impl Navigation {
    /// Resolve a slug to a navigation item.
    ///
    /// The candidate path is the slug joined with `/`; it must equal an item
    /// path exactly (case-sensitive). Misses are not errors.
    #[must_use]
    pub fn resolve_route<S: AsRef<str>>(&self, slug: &[S]) -> RouteResolution<'_> {
        let path = slug_to_path(slug);
        RouteResolution::from_item(self.find_item_by_path(&path))
    }

    /// Every item path, section order then item order.
    ///
    /// Used for route listing and static path generation.
    #[must_use]
    pub fn all_route_paths(&self) -> Vec<String> {
        self.items().map(|item| item.path.clone()).collect()
    }

    /// Items to suggest on a not-found page.
    ///
    /// Picks the items sharing the longest leading run of slug segments with
    /// `path`, in tree order. With no shared segment at all, falls back to the
    /// first items of the tree.
    #[must_use]
    pub fn suggestions(&self, path: &str, limit: usize) -> Vec<&NavigationItem> {
        let slug = path_to_slug(path);
        let shared = |item: &NavigationItem| {
            item.path
                .split('/')
                .filter(|segment| !segment.is_empty())
                .zip(&slug)
                .take_while(|(a, b)| a == b)
                .count()
        };

        let best = self.items().map(shared).max().unwrap_or(0);
        if best == 0 {
            return self.items().take(limit).collect();
        }

        self.items()
            .filter(|item| shared(item) == best)
            .take(limit)
            .collect()
    }
}
