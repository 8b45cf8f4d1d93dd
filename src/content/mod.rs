//! Content index: typed queries over the pages of a site.
//!
//! [`ContentIndex`] is the query surface listing pages and tag pages are
//! built on. [`FsContentIndex`] implements it over a directory of
//! Markdown files.

mod fs;

pub use fs::FsContentIndex;

use std::path::PathBuf;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

use crate::page::PageMeta;
use crate::paginate::{DEFAULT_MAX_BUTTONS, Pagination};

/// Kind of pages that are neither typed nor inside a section directory.
pub const DEFAULT_KIND: &str = "page";

/// One indexed page.
#[derive(Debug, Clone, Serialize)]
pub struct ContentNode {
    /// Path relative to the content root.
    pub path: PathBuf,
    pub permalink: String,
    pub kind: String,
    pub meta: PageMeta,
}

/// Query criteria. Empty fields match everything.
#[derive(Debug, Clone, Default)]
pub struct ContentFilter {
    pub kind: Option<String>,
    /// Case-insensitive tag.
    pub tag: Option<String>,
    pub include_drafts: bool,
}

impl ContentFilter {
    pub fn kind(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            ..Self::default()
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn matches(&self, node: &ContentNode) -> bool {
        if node.meta.draft && !self.include_drafts {
            return false;
        }
        if let Some(kind) = &self.kind
            && node.kind != *kind
        {
            return false;
        }
        self.tag.as_deref().is_none_or(|tag| node.meta.has_tag(tag))
    }
}

/// One page of query results.
#[derive(Debug, Clone, Serialize)]
pub struct ContentPage<'a> {
    pub nodes: Vec<&'a ContentNode>,
    pub pagination: Pagination,
}

/// Read access to indexed content.
///
/// Implementors provide [`nodes`](Self::nodes) in listing order; the
/// queries are derived from it.
pub trait ContentIndex {
    /// Every node, newest first.
    fn nodes(&self) -> &[ContentNode];

    /// Nodes matching `filter`, in listing order.
    fn query(&self, filter: &ContentFilter) -> Vec<&ContentNode> {
        self.nodes().iter().filter(|n| filter.matches(n)).collect()
    }

    /// The `page`-th (1-based) slice of [`query`](Self::query).
    ///
    /// A `per_page` of zero is treated as one.
    fn query_page(&self, filter: &ContentFilter, page: usize, per_page: usize) -> ContentPage<'_> {
        let per_page = per_page.max(1);
        let matched = self.query(filter);
        let pagination = Pagination::new(page, per_page, matched.len(), DEFAULT_MAX_BUTTONS);

        let skip = page.saturating_sub(1).saturating_mul(per_page);
        let nodes = if page == 0 {
            Vec::new()
        } else {
            matched.into_iter().skip(skip).take(per_page).collect()
        };

        ContentPage { nodes, pagination }
    }

    /// Tag counts over published nodes, most used first then by name.
    ///
    /// Tags are matched case-insensitively, like [`ContentFilter::tag`],
    /// and shown in their first spelling in listing order. A node counts
    /// once per tag however often it repeats it.
    fn tags(&self) -> Vec<(String, usize)> {
        let mut counts: FxHashMap<String, (&str, usize)> = FxHashMap::default();
        for node in self.nodes().iter().filter(|n| !n.meta.draft) {
            let mut seen = FxHashSet::default();
            for tag in &node.meta.tags {
                let key = tag.to_ascii_lowercase();
                if seen.insert(key.clone()) {
                    counts.entry(key).or_insert((tag.as_str(), 0)).1 += 1;
                }
            }
        }

        let mut tags: Vec<_> = counts
            .into_values()
            .map(|(tag, count)| (tag.to_string(), count))
            .collect();
        tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        tags
    }
}
