//! Post metadata from Markdown front matter.

use serde::{Deserialize, Serialize};

use super::JsonMap;

/// Deserialize tags, treating `null` as empty vec
fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Page metadata from `---` / `+++` front matter.
///
/// # Standard Fields
///
/// | Field     | Type          | Description                              |
/// |-----------|---------------|------------------------------------------|
/// | `title`   | `String`      | Page title                               |
/// | `summary` | `String`      | Short description for listings           |
/// | `date`    | `String`      | Publication date (`YYYY-MM-DD` sorts)    |
/// | `update`  | `String`      | Last update date                         |
/// | `author`  | `String`      | Author name                              |
/// | `draft`   | `bool`        | Draft status (default: false)            |
/// | `tags`    | `Vec<String>` | Tags                                     |
/// | `type`    | `String`      | Content type (`blog`, `tutorial`, ...)   |
///
/// Any other key lands in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PageMeta {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub date: Option<String>,
    pub update: Option<String>,
    pub author: Option<String>,
    pub draft: bool,
    #[serde(deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
    /// Content type. Falls back to the top-level content directory.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Additional user-defined fields.
    #[serde(flatten)]
    pub extra: JsonMap,
}

impl PageMeta {
    /// Case-insensitive tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}
