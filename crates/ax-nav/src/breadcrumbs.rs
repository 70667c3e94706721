//! Breadcrumb trails derived from URL paths.
//!
//! A trail always starts at "Home" and ends with an active, non-navigable
//! step for the current page. Trails come from one of three branches, recorded
//! in [`TrailOrigin`]:
//!
//! - the site root itself,
//! - the navigation tree, when the path or one of its ancestors is registered,
//! - raw slug segments, humanized, when nothing along the path is registered.

use serde::Serialize;

use crate::navigation::Navigation;
use crate::route::{path_to_slug, slug_to_path};

/// Label of the first step of every trail.
const HOME_LABEL: &str = "Home";

/// One step of a breadcrumb trail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbStep {
    /// Display text.
    pub label: String,
    /// Link target. Absent for the current (last) step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// True only for the last step.
    pub is_active: bool,
}

impl BreadcrumbStep {
    fn link(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: Some(path.into()),
            is_active: false,
        }
    }

    fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: None,
            is_active: true,
        }
    }
}

/// Which branch produced a trail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailOrigin {
    /// The path is the site root.
    Root,
    /// Steps were taken from registered items and sections.
    Navigation,
    /// Nothing along the path is registered; steps are humanized segments.
    Synthesized,
}

/// Breadcrumb trail with the branch that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Breadcrumbs {
    /// Producing branch.
    pub origin: TrailOrigin,
    /// Steps, root first.
    pub steps: Vec<BreadcrumbStep>,
}

impl Navigation {
    /// Build the breadcrumb trail for a URL path.
    ///
    /// Never fails: unknown paths get a synthesized trail.
    ///
    /// # Arguments
    ///
    /// * `path` - URL path (e.g. "/docs/components/button", "/" for root)
    #[must_use]
    pub fn breadcrumbs(&self, path: &str) -> Breadcrumbs {
        let slug = path_to_slug(path);
        let Some(last_segment) = slug.last() else {
            return Breadcrumbs {
                origin: TrailOrigin::Root,
                steps: vec![BreadcrumbStep::current(HOME_LABEL)],
            };
        };

        // Prefix paths of the slug, shallowest first; the last one is `path` itself
        let prefixes: Vec<String> = (1..=slug.len())
            .map(|n| slug_to_path(&slug[..n]))
            .collect();
        let (ancestors, current) = prefixes.split_at(prefixes.len() - 1);
        let current = &current[0];

        let mut steps = vec![BreadcrumbStep::link(HOME_LABEL, "/")];

        let recognized = prefixes.iter().any(|prefix| self.title_for(prefix).is_some());
        let origin = if recognized {
            steps.extend(ancestors.iter().filter_map(|prefix| {
                self.title_for(prefix)
                    .map(|title| BreadcrumbStep::link(title, prefix.as_str()))
            }));
            let label = self
                .title_for(current)
                .map_or_else(|| humanize(last_segment), ToOwned::to_owned);
            steps.push(BreadcrumbStep::current(label));
            TrailOrigin::Navigation
        } else {
            steps.extend(slug.iter().zip(ancestors).map(|(segment, prefix)| {
                BreadcrumbStep::link(humanize(segment), prefix.as_str())
            }));
            steps.push(BreadcrumbStep::current(humanize(last_segment)));
            TrailOrigin::Synthesized
        };

        Breadcrumbs { origin, steps }
    }
}

/// Turn a slug segment into a display label.
///
/// Hyphens and underscores become spaces and each word is capitalized:
/// `"getting-started"` → `"Getting Started"`. A segment with no word
/// characters is returned unchanged.
#[must_use]
pub fn humanize(segment: &str) -> String {
    let words: Vec<String> = segment
        .split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect();

    if words.is_empty() {
        segment.to_owned()
    } else {
        words.join(" ")
    }
}
