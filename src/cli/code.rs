//! `code` and `ranges` commands.

use std::path::Path;

use anyhow::Result;

use super::OutputArgs;
use super::output::{read_input, write_json};
use crate::code::{CodeSnippet, parse_ranges};
use crate::debug;

/// Parse a snippet header and print `{lang, metadata, code, highlight}`.
pub fn run_code(file: &Path, lang: Option<&str>, output: &OutputArgs) -> Result<()> {
    let source = read_input(file)?;
    let lang = lang.or_else(|| file.extension().and_then(|ext| ext.to_str()));

    let parsed = CodeSnippet::new(&source, lang).parse();
    debug!(
        "code";
        "{} directives, {} highlighted lines",
        parsed.metadata.len(),
        parsed.highlight.len()
    );
    write_json(&parsed, output)
}

/// Print the expanded line list of a range expression.
pub fn run_ranges(ranges: &str, output: &OutputArgs) -> Result<()> {
    write_json(&parse_ranges(Some(ranges)), output)
}
