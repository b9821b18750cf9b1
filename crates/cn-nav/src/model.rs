//! Navigation model types.
//!
//! The navigation model is a tree of immutable-after-construction value
//! objects: [`NavItem`] nodes grouped into [`NavSection`] buckets. The whole
//! model is rebuilt on every scan; nothing is shared or mutated afterwards.

use serde::Serialize;

/// Sentinel href marking a non-navigable grouping node.
///
/// A grouping node has no page of its own and exists only to hold children;
/// the UI renders it as a non-clickable label.
pub const GROUPING_HREF: &str = "#";

/// A single navigation entry.
///
/// Leaf items always carry a concrete `href`. Non-leaf items carry either a
/// concrete `href` (the directory is itself a page) or [`GROUPING_HREF`]
/// (a pure grouping folder).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Display title.
    pub title: String,
    /// Route path, or [`GROUPING_HREF`] for grouping nodes.
    pub href: String,
    /// Child navigation items, sorted. Present iff non-empty in JSON.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
    /// Explicit author-assigned sort key from page metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl NavItem {
    /// Create a leaf item with no children and no explicit order.
    #[must_use]
    pub fn leaf(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
            children: Vec::new(),
            order: None,
        }
    }
}

/// A named section of the sidebar holding an ordered run of items.
///
/// Sections are emitted only when they hold at least one item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavSection {
    /// Section label from the fixed category taxonomy.
    pub title: String,
    /// Items assigned to this section, in scan order.
    pub items: Vec<NavItem>,
}
