//! `list` and `tags` commands over the content index.

use anyhow::Result;
use serde::Serialize;

use super::output::write_json;
use super::{ListArgs, OutputArgs};
use crate::config::FolioConfig;
use crate::content::{ContentFilter, ContentIndex, ContentNode, FsContentIndex};
use crate::log;
use crate::paginate::Pagination;
use crate::utils::plural_count;

/// One page of a content listing.
#[derive(Debug, Serialize)]
struct Listing<'a> {
    items: Vec<ListItem<'a>>,
    pagination: Pagination,
    total_pages: usize,
    summary: Option<String>,
}

#[derive(Debug, Serialize)]
struct ListItem<'a> {
    permalink: &'a str,
    kind: &'a str,
    title: Option<&'a str>,
    date: Option<&'a str>,
    tags: &'a [String],
    draft: bool,
}

impl<'a> From<&'a ContentNode> for ListItem<'a> {
    fn from(node: &'a ContentNode) -> Self {
        Self {
            permalink: &node.permalink,
            kind: &node.kind,
            title: node.meta.title.as_deref(),
            date: node.meta.date.as_deref(),
            tags: &node.meta.tags,
            draft: node.meta.draft,
        }
    }
}

fn scan(config: &FolioConfig) -> Result<FsContentIndex> {
    let index = FsContentIndex::scan(config.content_dir())?;
    log!(
        "content";
        "indexed {} in {}",
        plural_count(index.nodes().len(), "page"),
        config.content_dir().display()
    );
    Ok(index)
}

pub fn run_list(args: &ListArgs, config: &FolioConfig) -> Result<()> {
    let index = scan(config)?;
    let filter = ContentFilter {
        kind: args.kind.clone(),
        tag: args.tag.clone(),
        include_drafts: args.drafts,
    };

    let mut page = index.query_page(&filter, args.page, config.pagination.per_page);
    page.pagination.max_page_buttons = config.pagination.max_buttons;

    let pagination = page.pagination;
    let listing = Listing {
        items: page.nodes.into_iter().map(ListItem::from).collect(),
        total_pages: pagination.total_pages(),
        summary: (!pagination.is_empty()).then(|| pagination.summary()),
        pagination,
    };
    write_json(&listing, &args.output)
}

pub fn run_tags(output: &OutputArgs, config: &FolioConfig) -> Result<()> {
    let index = scan(config)?;
    let tags: Vec<_> = index
        .tags()
        .into_iter()
        .map(|(tag, count)| serde_json::json!({ "tag": tag, "count": count }))
        .collect();
    write_json(&tags, output)
}
