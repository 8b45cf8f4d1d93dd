//! `render` command.

use std::path::Path;

use anyhow::Result;

use super::OutputArgs;
use super::output::{read_input, write_json, write_text};
use crate::config::FolioConfig;
use crate::debug;
use crate::markdown::render;

/// Render a Markdown file to HTML, or to JSON with metadata and TOC.
pub fn run_render(file: &Path, json: bool, output: &OutputArgs, config: &FolioConfig) -> Result<()> {
    let content = read_input(file)?;
    let page = render(&content, &config.render_options())?;
    debug!(
        "render";
        "{}: {} toc entries, {} bytes of html",
        file.display(),
        page.toc.len(),
        page.html.len()
    );

    if json {
        write_json(&page, output)
    } else {
        write_text(&page.html, output)
    }
}
