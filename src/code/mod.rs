//! Code block metadata.
//!
//! - [`header`] - `@key: value` directive headers in leading comments
//! - [`ranges`] - line range lists for highlighting

pub mod header;
pub mod ranges;

pub use header::{CommentStyle, DirectiveValue, HeaderMetadata, parse};
pub use ranges::{HighlightSet, parse_ranges};

use serde::Serialize;

/// A fenced code block as authored.
#[derive(Debug, Clone, Copy)]
pub struct CodeSnippet<'a> {
    pub source: &'a str,
    /// Language from the fence info string, if declared.
    pub lang: Option<&'a str>,
}

impl<'a> CodeSnippet<'a> {
    pub const fn new(source: &'a str, lang: Option<&'a str>) -> Self {
        Self { source, lang }
    }

    /// Extract the header directives and the highlighted lines.
    ///
    /// Highlighted lines past the end of the code are dropped.
    pub fn parse(&self) -> ParsedSnippet<'a> {
        let (metadata, code) = header::parse(self.source);
        let line_count = u32::try_from(code.lines().count()).unwrap_or(u32::MAX);
        let highlight = HighlightSet::clamped(metadata.highlight(), line_count);
        ParsedSnippet {
            lang: self.lang,
            metadata,
            code,
            highlight,
        }
    }
}

/// A code block ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedSnippet<'a> {
    pub lang: Option<&'a str>,
    pub metadata: HeaderMetadata,
    /// Source with the header removed.
    pub code: &'a str,
    #[serde(serialize_with = "serialize_highlight")]
    pub highlight: HighlightSet,
}

fn serialize_highlight<S>(set: &HighlightSet, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(set.sorted())
}
