//! Markdown documents.
//!
//! - [`frontmatter`] - `---` / `+++` front matter
//! - [`render`] - HTML rendering with heading ids and code block directives

pub mod frontmatter;
pub mod render;

pub use frontmatter::{extract_frontmatter, split_frontmatter};
pub use render::{RenderOptions, RenderedPage, render, render_body, table_of_contents};
