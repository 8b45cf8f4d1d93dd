//! Outline extraction from Markdown headings.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use super::TocNode;

/// A heading as it appears in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: usize,
    pub text: String,
    /// Explicit `{#id}` attribute, if any.
    pub id: Option<String>,
}

pub(crate) fn heading_level(level: HeadingLevel) -> usize {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Parser options shared by heading extraction and rendering.
///
/// Front matter blocks are recognized so a closing `---` is never read as
/// a setext heading underline.
pub(crate) fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_HEADING_ATTRIBUTES
        | Options::ENABLE_YAML_STYLE_METADATA_BLOCKS
        | Options::ENABLE_PLUSES_DELIMITED_METADATA_BLOCKS
}

/// Extract headings in document order.
pub fn headings(markdown: &str) -> Vec<Heading> {
    let mut headings = Vec::new();
    let mut current: Option<Heading> = None;

    for event in Parser::new_ext(markdown, parser_options()) {
        match event {
            Event::Start(Tag::Heading { level, id, .. }) => {
                current = Some(Heading {
                    level: heading_level(level),
                    text: String::new(),
                    id: id.map(|id| id.to_string()),
                });
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some(heading) = current.as_mut() {
                    heading.text.push_str(&text);
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(mut heading) = current.take() {
                    heading.text = heading.text.trim().to_string();
                    headings.push(heading);
                }
            }
            _ => {}
        }
    }

    headings
}

/// Build a table of contents tree from a Markdown document.
///
/// A heading's tree depth always equals its level: when a level is
/// skipped (`#` followed by `###`), an untitled placeholder node fills the
/// gap. The ids computed by [`flatten`](super::flatten) therefore match
/// the ids the renderer puts on the headings.
pub fn outline(markdown: &str) -> TocNode {
    let mut root = TocNode::default();
    for heading in headings(markdown) {
        let node = TocNode {
            title: heading.text,
            url: heading.id.map(|id| format!("#{id}")),
            items: Vec::new(),
        };
        insert(&mut root, heading.level, node);
    }
    root
}

/// Append `node` at `level`, descending through the last child of each
/// ancestor level.
fn insert(root: &mut TocNode, level: usize, node: TocNode) {
    let mut parent = root;
    for _ in 1..level {
        if parent.items.is_empty() {
            parent.items.push(TocNode::default());
        }
        let last = parent.items.len() - 1;
        parent = &mut parent.items[last];
    }
    parent.items.push(node);
}
