//! `toc` command.

use std::path::Path;

use anyhow::Result;

use super::OutputArgs;
use super::output::{read_input, write_json};
use crate::config::FolioConfig;
use crate::markdown::{split_frontmatter, table_of_contents};
use crate::toc::outline;

/// Print the table of contents of a Markdown file.
///
/// The flat list uses the same heading ids as `render`.
pub fn run_toc(file: &Path, tree: bool, output: &OutputArgs, config: &FolioConfig) -> Result<()> {
    let content = read_input(file)?;
    let (_, body) = split_frontmatter(&content)?;

    if tree {
        write_json(&outline(body), output)
    } else {
        write_json(&table_of_contents(body, &config.render_options()), output)
    }
}
