//! Accessible labels for navigation entries.

use crate::navigation::{Badge, NavigationItem};

/// Inputs of an accessible label.
#[derive(Clone, Copy, Debug, Default)]
pub struct AriaParts<'a> {
    /// Display title.
    pub title: &'a str,
    /// Optional description. Empty strings are treated as absent.
    pub description: Option<&'a str>,
    /// Optional badge. Its text is appended even when empty.
    pub badge: Option<&'a Badge>,
}

impl<'a> From<&'a NavigationItem> for AriaParts<'a> {
    fn from(item: &'a NavigationItem) -> Self {
        Self {
            title: &item.title,
            description: item.description.as_deref(),
            badge: item.badge.as_ref(),
        }
    }
}

/// Compose a single label for assistive technology.
///
/// `"Settings, Opens preferences, New"` for a title, description and badge.
/// An empty description is dropped, but a present badge always contributes,
/// so `{title: "Settings", badge: {text: ""}}` yields `"Settings, "`.
#[must_use]
pub fn aria_label(parts: &AriaParts<'_>) -> String {
    let mut label = parts.title.to_owned();

    if let Some(description) = parts.description.filter(|d| !d.is_empty()) {
        label.push_str(", ");
        label.push_str(description);
    }

    if let Some(badge) = parts.badge {
        label.push_str(", ");
        label.push_str(&badge.text);
    }

    label
}

impl NavigationItem {
    /// Accessible label for this item.
    #[must_use]
    pub fn aria_label(&self) -> String {
        aria_label(&AriaParts::from(self))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn badge(text: &str) -> Badge {
        Badge {
            text: text.to_owned(),
        }
    }

    #[test]
    fn test_title_only() {
        let parts = AriaParts {
            title: "Home",
            ..Default::default()
        };

        assert_eq!(aria_label(&parts), "Home");
    }

    #[test]
    fn test_title_and_description() {
        let parts = AriaParts {
            title: "Home",
            description: Some("Go to home page"),
            ..Default::default()
        };

        assert_eq!(aria_label(&parts), "Home, Go to home page");
    }

    #[test]
    fn test_title_and_badge() {
        let new = badge("New");
        let parts = AriaParts {
            title: "Settings",
            badge: Some(&new),
            ..Default::default()
        };

        assert_eq!(aria_label(&parts), "Settings, New");
    }

    #[test]
    fn test_empty_description_is_dropped() {
        let parts = AriaParts {
            title: "Home",
            description: Some(""),
            ..Default::default()
        };

        assert_eq!(aria_label(&parts), "Home");
    }

    #[test]
    fn test_empty_badge_text_is_kept() {
        let empty = badge("");
        let parts = AriaParts {
            title: "Settings",
            badge: Some(&empty),
            ..Default::default()
        };

        assert_eq!(aria_label(&parts), "Settings, ");
    }

    #[test]
    fn test_description_then_badge() {
        let item = NavigationItem {
            id: "masonry-grid".to_owned(),
            title: "Masonry Grid".to_owned(),
            path: "/docs/layouts/masonry-grid".to_owned(),
            description: Some("Pinterest-style layout".to_owned()),
            badge: Some(badge("New")),
        };

        assert_eq!(item.aria_label(), "Masonry Grid, Pinterest-style layout, New");
    }
}
