//! Navigation tree for the documentation site.
//!
//! The tree is a list of sections, each holding an ordered list of items.
//! It is built once at startup, validated, and then only read.
//!
//! # Architecture
//!
//! Sections and items are stored in definition order (which is display order).
//! A `path_index` `HashMap` maps every item path and section root path to its
//! position, giving O(1) lookups for route resolution and breadcrumbs.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::route::{path_to_slug, slug_to_path};

/// Navigation definition compiled into the crate.
const BUILTIN_NAVIGATION: &str = include_str!("navigation.yaml");

/// Badge shown next to a navigation item (e.g. "New", "Beta").
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    /// Badge text.
    pub text: String,
}

/// A single navigable page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItem {
    /// Identifier, unique within its section.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Canonical URL path (e.g. "/docs/components/button"), unique across the tree.
    pub path: String,
    /// Short description, used for accessible labels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional badge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
}

/// Ordered group of navigation items.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationSection {
    /// Section identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Section root path (e.g. "/docs/components"), if the section has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Items in display order.
    #[serde(default)]
    pub items: Vec<NavigationItem>,
}

/// Navigation file as parsed from YAML.
#[derive(Deserialize)]
struct NavigationFile {
    sections: Vec<NavigationSection>,
}

/// Navigation loading or validation error.
#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    /// I/O error while reading a navigation file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// Path that cannot round-trip through the route mapper.
    #[error("Malformed navigation path {path:?}: {reason}")]
    MalformedPath {
        /// Offending path.
        path: String,
        /// What is wrong with it.
        reason: &'static str,
    },
    /// Two entries share the same path.
    #[error("Duplicate navigation path {0:?}")]
    DuplicatePath(String),
    /// Two sections share the same id.
    #[error("Duplicate section id {0:?}")]
    DuplicateSection(String),
    /// Two items in one section share the same id.
    #[error("Duplicate item id {id:?} in section {section:?}")]
    DuplicateItem {
        /// Section id.
        section: String,
        /// Item id.
        id: String,
    },
}

/// Position of an indexed path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PathEntry {
    Item { section: usize, item: usize },
    Section(usize),
}

/// Validated, read-only navigation tree.
#[derive(Debug)]
pub struct Navigation {
    sections: Vec<NavigationSection>,
    path_index: HashMap<String, PathEntry>,
}

impl Navigation {
    /// Build a navigation tree from sections.
    ///
    /// # Errors
    ///
    /// Returns an error if a path is malformed or an id/path is duplicated.
    pub fn new(sections: Vec<NavigationSection>) -> Result<Self, NavigationError> {
        let mut path_index = HashMap::new();
        let mut section_ids = HashSet::new();

        for (section_idx, section) in sections.iter().enumerate() {
            if !section_ids.insert(section.id.as_str()) {
                return Err(NavigationError::DuplicateSection(section.id.clone()));
            }

            if let Some(path) = &section.path {
                validate_path(path)?;
                if path_index
                    .insert(path.clone(), PathEntry::Section(section_idx))
                    .is_some()
                {
                    return Err(NavigationError::DuplicatePath(path.clone()));
                }
            }

            let mut item_ids = HashSet::new();
            for (item_idx, item) in section.items.iter().enumerate() {
                if !item_ids.insert(item.id.as_str()) {
                    return Err(NavigationError::DuplicateItem {
                        section: section.id.clone(),
                        id: item.id.clone(),
                    });
                }

                validate_path(&item.path)?;
                let entry = PathEntry::Item {
                    section: section_idx,
                    item: item_idx,
                };
                if path_index.insert(item.path.clone(), entry).is_some() {
                    return Err(NavigationError::DuplicatePath(item.path.clone()));
                }
            }
        }

        tracing::debug!(
            sections = sections.len(),
            paths = path_index.len(),
            "Navigation loaded"
        );

        Ok(Self {
            sections,
            path_index,
        })
    }

    /// Parse and validate a YAML navigation definition.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing or validation fails.
    pub fn from_yaml(content: &str) -> Result<Self, NavigationError> {
        let file: NavigationFile = serde_yaml::from_str(content)?;
        Self::new(file.sections)
    }

    /// Load a YAML navigation definition from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self, NavigationError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Navigation of the Atomix documentation site, compiled into the crate.
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded definition is invalid.
    pub fn builtin() -> Result<Self, NavigationError> {
        Self::from_yaml(BUILTIN_NAVIGATION)
    }

    /// Sections in display order.
    #[must_use]
    pub fn sections(&self) -> &[NavigationSection] {
        &self.sections
    }

    /// All items, section order then item order.
    pub fn items(&self) -> impl Iterator<Item = &NavigationItem> {
        self.sections.iter().flat_map(|section| section.items.iter())
    }

    /// Find an item by its exact path.
    ///
    /// Paths are unique (enforced by [`Navigation::new`]), so the first
    /// match in section/item order is the only match.
    #[must_use]
    pub fn find_item_by_path(&self, path: &str) -> Option<&NavigationItem> {
        match self.path_index.get(path)? {
            PathEntry::Item { section, item } => Some(&self.sections[*section].items[*item]),
            PathEntry::Section(_) => None,
        }
    }

    /// Find a section by its root path.
    #[must_use]
    pub fn find_section_by_path(&self, path: &str) -> Option<&NavigationSection> {
        match self.path_index.get(path)? {
            PathEntry::Section(section) => Some(&self.sections[*section]),
            PathEntry::Item { .. } => None,
        }
    }

    /// Display title of the item or section registered at `path`.
    pub(crate) fn title_for(&self, path: &str) -> Option<&str> {
        match self.path_index.get(path)? {
            PathEntry::Item { section, item } => {
                Some(self.sections[*section].items[*item].title.as_str())
            }
            PathEntry::Section(section) => Some(self.sections[*section].title.as_str()),
        }
    }
}

/// Require a path to survive a slug round-trip unchanged.
fn validate_path(path: &str) -> Result<(), NavigationError> {
    let malformed = |reason| NavigationError::MalformedPath {
        path: path.to_owned(),
        reason,
    };

    if !path.starts_with('/') {
        return Err(malformed("must start with '/'"));
    }

    let slug = path_to_slug(path);
    if slug.is_empty() {
        return Err(malformed("must not be the site root"));
    }
    if slug_to_path(&slug) != path {
        return Err(malformed("must not contain empty segments or a trailing slash"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn item(id: &str, path: &str) -> NavigationItem {
        NavigationItem {
            id: id.to_owned(),
            title: id.to_owned(),
            path: path.to_owned(),
            description: None,
            badge: None,
        }
    }

    fn section(id: &str, path: Option<&str>, items: Vec<NavigationItem>) -> NavigationSection {
        NavigationSection {
            id: id.to_owned(),
            title: id.to_owned(),
            path: path.map(ToOwned::to_owned),
            items,
        }
    }

    #[test]
    fn test_builtin_navigation_is_valid() {
        let nav = Navigation::builtin().unwrap();

        assert!(!nav.sections().is_empty());
        assert!(nav.items().count() > 10);
    }

    #[test]
    fn test_find_item_by_path_returns_button() {
        let nav = Navigation::builtin().unwrap();

        let item = nav.find_item_by_path("/docs/components/button").unwrap();

        assert_eq!(item.id, "button");
        assert_eq!(item.title, "Button");
    }

    #[test]
    fn test_find_item_by_path_is_case_sensitive() {
        let nav = Navigation::builtin().unwrap();

        assert!(nav.find_item_by_path("/docs/components/Button").is_none());
        assert!(nav.find_item_by_path("/docs/components/button/").is_none());
    }

    #[test]
    fn test_find_item_by_path_ignores_sections() {
        let nav = Navigation::builtin().unwrap();

        assert!(nav.find_item_by_path("/docs/components").is_none());
        let section = nav.find_section_by_path("/docs/components").unwrap();
        assert_eq!(section.id, "components");
    }

    #[test]
    fn test_items_preserve_definition_order() {
        let nav = Navigation::new(vec![
            section("b", None, vec![item("two", "/b/two"), item("one", "/b/one")]),
            section("a", None, vec![item("three", "/a/three")]),
        ])
        .unwrap();

        let ids: Vec<&str> = nav.items().map(|i| i.id.as_str()).collect();

        assert_eq!(ids, vec!["two", "one", "three"]);
    }

    #[test]
    fn test_from_yaml_parses_badge_and_description() {
        let yaml = r"
sections:
  - id: guides
    title: Guides
    items:
      - id: theming
        title: Theming
        path: /docs/guides/theming
        description: Colors and fonts
        badge:
          text: New
";
        let nav = Navigation::from_yaml(yaml).unwrap();
        let item = nav.find_item_by_path("/docs/guides/theming").unwrap();

        assert_eq!(item.description.as_deref(), Some("Colors and fonts"));
        assert_eq!(item.badge.as_ref().map(|b| b.text.as_str()), Some("New"));
        assert!(nav.sections()[0].path.is_none());
    }

    #[test]
    fn test_from_file_reads_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("navigation.yaml");
        std::fs::write(
            &path,
            "sections:\n  - id: s\n    title: S\n    items:\n      - {id: a, title: A, path: /a}\n",
        )
        .unwrap();

        let nav = Navigation::from_file(&path).unwrap();

        assert_eq!(nav.find_item_by_path("/a").unwrap().id, "a");
    }

    #[test]
    fn test_from_file_missing_is_io_error() {
        let dir = tempfile::tempdir().unwrap();

        let err = Navigation::from_file(&dir.path().join("missing.yaml")).unwrap_err();

        assert!(matches!(err, NavigationError::Io(_)));
    }

    #[test]
    fn test_duplicate_item_path_rejected() {
        let result = Navigation::new(vec![
            section("a", None, vec![item("x", "/docs/x")]),
            section("b", None, vec![item("y", "/docs/x")]),
        ]);

        let err = result.unwrap_err();
        assert!(matches!(err, NavigationError::DuplicatePath(ref p) if p == "/docs/x"));
    }

    #[test]
    fn test_section_path_colliding_with_item_rejected() {
        let result = Navigation::new(vec![section(
            "a",
            Some("/docs/a"),
            vec![item("a", "/docs/a")],
        )]);

        assert!(matches!(result, Err(NavigationError::DuplicatePath(_))));
    }

    #[test]
    fn test_duplicate_item_id_in_section_rejected() {
        let result = Navigation::new(vec![section(
            "a",
            None,
            vec![item("x", "/a/1"), item("x", "/a/2")],
        )]);

        assert!(matches!(
            result,
            Err(NavigationError::DuplicateItem { ref section, ref id }) if section == "a" && id == "x"
        ));
    }

    #[test]
    fn test_same_item_id_in_different_sections_allowed() {
        let result = Navigation::new(vec![
            section("a", None, vec![item("overview", "/a/overview")]),
            section("b", None, vec![item("overview", "/b/overview")]),
        ]);

        assert!(result.is_ok());
    }

    #[test]
    fn test_duplicate_section_id_rejected() {
        let result = Navigation::new(vec![section("a", None, vec![]), section("a", None, vec![])]);

        assert!(matches!(result, Err(NavigationError::DuplicateSection(_))));
    }

    #[test]
    fn test_malformed_paths_rejected() {
        for path in ["docs/a", "/", "/docs//a", "/docs/a/"] {
            let result = Navigation::new(vec![section("s", None, vec![item("a", path)])]);

            assert!(
                matches!(result, Err(NavigationError::MalformedPath { .. })),
                "expected {path:?} to be rejected"
            );
        }
    }
}
