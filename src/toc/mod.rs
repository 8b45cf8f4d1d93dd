//! Table of contents.
//!
//! - [`TocNode`] - nested outline (root's children are depth 1)
//! - [`flatten`] - pre-order list of [`TocEntry`] with heading ids
//! - [`outline`] - build a [`TocNode`] tree from a Markdown document
//! - [`slug`] - heading id algorithm shared with the Markdown renderer

pub mod outline;
pub mod slug;

pub use outline::{Heading, headings, outline};
pub use slug::{HeadingIds, SlugMode, heading_id, slugify};

use serde::{Deserialize, Serialize};

/// A node of a nested table of contents.
///
/// The tree root is a container whose own title is never rendered.
/// Depth is implied by nesting: the root's children are depth 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TocNode {
    pub title: String,
    /// Anchor reference declared by the source (`#intro`), if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<TocNode>,
}

impl TocNode {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_items(mut self, items: Vec<TocNode>) -> Self {
        self.items = items;
        self
    }

    /// An untitled node standing in for a skipped heading level.
    pub fn is_placeholder(&self) -> bool {
        self.title.trim().is_empty() && self.url.is_none()
    }
}

/// One row of a flattened table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    pub depth: usize,
    /// `None` only for nodes with neither a title nor an anchor.
    pub anchor_id: Option<String>,
    pub title: String,
}

/// Flatten `root` in pre-order with the default heading ids.
pub fn flatten(root: &TocNode) -> Vec<TocEntry> {
    flatten_with(root, &mut HeadingIds::default())
}

/// Flatten `root` in pre-order, assigning ids with `ids`.
///
/// The root itself is skipped; its children start at depth 1. Sibling
/// order is preserved and empty child lists end a branch.
pub fn flatten_with(root: &TocNode, ids: &mut HeadingIds) -> Vec<TocEntry> {
    let mut entries = Vec::new();
    collect(&root.items, 1, ids, &mut entries);
    entries
}

fn collect(nodes: &[TocNode], depth: usize, ids: &mut HeadingIds, out: &mut Vec<TocEntry>) {
    for node in nodes {
        out.push(TocEntry {
            depth,
            anchor_id: anchor_for(node, depth, ids),
            title: node.title.clone(),
        });
        collect(&node.items, depth + 1, ids, out);
    }
}

/// Titled nodes get a heading id; untitled ones fall back to their own
/// anchor reference.
fn anchor_for(node: &TocNode, depth: usize, ids: &mut HeadingIds) -> Option<String> {
    if !node.title.trim().is_empty() {
        return Some(ids.assign(depth, &node.title));
    }
    node.url
        .as_deref()
        .map(|url| url.trim_start_matches('#'))
        .filter(|anchor| !anchor.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(depth: usize, title: &str, anchor: &str) -> TocEntry {
        TocEntry {
            depth,
            anchor_id: Some(anchor.to_string()),
            title: title.to_string(),
        }
    }

    #[test]
    fn test_flatten_nested() {
        let root = TocNode::default().with_items(vec![
            TocNode::new("A").with_items(vec![TocNode::new("B")]),
        ]);
        assert_eq!(
            flatten(&root),
            vec![entry(1, "A", "heading-1-a"), entry(2, "B", "heading-2-b")]
        );
    }

    #[test]
    fn test_flatten_preorder_and_sibling_order() {
        let root = TocNode::new("ignored root").with_items(vec![
            TocNode::new("One").with_items(vec![
                TocNode::new("One A").with_items(vec![TocNode::new("Deep")]),
                TocNode::new("One B"),
            ]),
            TocNode::new("Two"),
        ]);
        let titles: Vec<_> = flatten(&root)
            .into_iter()
            .map(|e| (e.depth, e.title))
            .collect();
        assert_eq!(
            titles,
            vec![
                (1, "One".to_string()),
                (2, "One A".to_string()),
                (3, "Deep".to_string()),
                (2, "One B".to_string()),
                (1, "Two".to_string()),
            ]
        );
    }

    #[test]
    fn test_flatten_empty_root() {
        assert!(flatten(&TocNode::default()).is_empty());
    }

    #[test]
    fn test_untitled_nodes() {
        let root = TocNode::default().with_items(vec![
            TocNode::default().with_items(vec![TocNode::new("Child")]),
            TocNode {
                url: Some("#custom".to_string()),
                ..TocNode::default()
            },
        ]);
        let entries = flatten(&root);
        assert_eq!(entries[0].anchor_id, None);
        assert_eq!(entries[1].anchor_id.as_deref(), Some("heading-2-child"));
        assert_eq!(entries[2].anchor_id.as_deref(), Some("custom"));
    }

    #[test]
    fn test_flatten_with_dedupe() {
        let root = TocNode::default().with_items(vec![TocNode::new("Setup"), TocNode::new("Setup")]);
        let plain = flatten(&root);
        assert_eq!(plain[0].anchor_id, plain[1].anchor_id);

        let deduped = flatten_with(&root, &mut HeadingIds::new(SlugMode::Full, true));
        assert_eq!(deduped[1].anchor_id.as_deref(), Some("heading-1-setup-1"));
    }

    #[test]
    fn test_deserialize_source_tree() {
        let json = r##"{"items":[{"title":"A","url":"#a","items":[{"title":"B"}]}]}"##;
        let root: TocNode = serde_json::from_str(json).unwrap();
        assert_eq!(root.items[0].url.as_deref(), Some("#a"));
        assert_eq!(flatten(&root).len(), 2);
    }
}
