//! Front matter extraction from YAML-like (`---`) or TOML (`+++`) blocks.

use anyhow::{Context, Result};
use serde_json::Value;

use crate::page::PageMeta;

/// Front matter fence style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fence {
    /// `---`, flat `key: value` lines.
    Yaml,
    /// `+++`, a TOML table.
    Toml,
}

impl Fence {
    const ALL: [Self; 2] = [Self::Yaml, Self::Toml];

    const fn marker(self) -> &'static str {
        match self {
            Self::Yaml => "---",
            Self::Toml => "+++",
        }
    }

    fn parse(self, block: &str) -> Result<PageMeta> {
        match self {
            Self::Yaml => Ok(parse_key_values(block)),
            Self::Toml => toml::from_str(block).context("Invalid TOML front matter"),
        }
    }
}

/// Extract front matter and return `(metadata, body)`.
///
/// Returns `Ok(None)` when the document has no front matter. TOML front
/// matter that fails to parse is an error; the YAML-like form never fails.
pub fn extract_frontmatter(content: &str) -> Result<Option<(PageMeta, &str)>> {
    let Some((fence, block, body)) = find_block(content) else {
        return Ok(None);
    };
    Ok(Some((fence.parse(block)?, body)))
}

/// Split off front matter, returning the body even when there is none.
pub fn split_frontmatter(content: &str) -> Result<(PageMeta, &str)> {
    Ok(extract_frontmatter(content)?.unwrap_or_else(|| (PageMeta::default(), content)))
}

/// Locate a fenced block at the start of the document.
fn find_block(content: &str) -> Option<(Fence, &str, &str)> {
    let trimmed = content.trim_start();
    Fence::ALL.into_iter().find_map(|fence| {
        let marker = fence.marker();
        let rest = trimmed.strip_prefix(marker)?;
        let end = rest.find(&format!("\n{marker}"))?;
        let body = rest[end + 1 + marker.len()..].trim_start_matches(['\r', '\n']);
        Some((fence, rest[..end].trim(), body))
    })
}

/// `key: value` lines. Keys are case-insensitive; unknown keys keep their
/// spelling in `extra`.
fn parse_key_values(block: &str) -> PageMeta {
    let mut meta = PageMeta::default();

    for line in block.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        let value = unquote(value.trim());
        let text = || Some(value.to_string());

        match key.to_ascii_lowercase().as_str() {
            "title" => meta.title = text(),
            "summary" | "description" => meta.summary = text(),
            "date" => meta.date = text(),
            "update" => meta.update = text(),
            "author" => meta.author = text(),
            "type" => meta.kind = text(),
            "draft" => meta.draft = value.eq_ignore_ascii_case("true"),
            "tags" => meta.tags = split_list(value).map(str::to_string).collect(),
            _ => {
                meta.extra.insert(key.to_string(), scalar(value));
            }
        }
    }

    meta
}

/// Items of `a, b` or `[a, "b"]`, unquoted, empty items dropped.
fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(',')
        .map(|item| unquote(item.trim()))
        .filter(|item| !item.is_empty())
}

fn unquote(s: &str) -> &str {
    ['"', '\'']
        .into_iter()
        .find_map(|quote| s.strip_prefix(quote)?.strip_suffix(quote))
        .unwrap_or(s)
}

/// JSON value of an unknown key: bool, null, number, comma list, or text.
fn scalar(value: &str) -> Value {
    match value.to_ascii_lowercase().as_str() {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        "null" | "~" => return Value::Null,
        _ => {}
    }
    if let Ok(n) = value.parse::<i64>() {
        return n.into();
    }
    if let Some(n) = value.parse::<f64>().ok().and_then(serde_json::Number::from_f64) {
        return Value::Number(n);
    }
    if value.contains(',') {
        return split_list(value).map(Value::from).collect();
    }
    Value::from(value)
}
