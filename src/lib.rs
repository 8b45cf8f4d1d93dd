//! folio - content presentation utilities for statically generated sites.
//!
//! | Module       | Purpose                                                |
//! |--------------|--------------------------------------------------------|
//! | [`code`]     | `@key: value` headers of code snippets, line ranges    |
//! | [`paginate`] | Page windows, visible ranges, page links               |
//! | [`toc`]      | Outlines from Markdown, flattened with heading ids     |
//! | [`markdown`] | Front matter and HTML rendering                        |
//! | [`content`]  | Content index over a directory of Markdown files       |
//! | [`config`]   | `folio.toml`                                           |
//! | [`cli`]      | Command-line interface                                 |

pub mod cli;
pub mod code;
pub mod config;
pub mod content;
pub mod logger;
pub mod markdown;
pub mod page;
pub mod paginate;
pub mod toc;
mod utils;

pub use code::{CodeSnippet, HeaderMetadata, parse_ranges};
pub use content::{ContentFilter, ContentIndex, ContentNode, FsContentIndex};
pub use markdown::{RenderOptions, RenderedPage, render};
pub use paginate::{Pagination, compute_total_pages, compute_visible_range, compute_window, page_link};
pub use toc::{TocEntry, TocNode, flatten, outline};
