//! Heading slugs and ids.

use std::borrow::Cow;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Characters removed outright before slugging (not replaced by `-`).
const STRIPPED: [char; 4] = [':', '.', '(', ')'];

/// Slug generation mode for heading ids.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlugMode {
    /// Transliterate Unicode to ASCII first (default).
    #[default]
    Full,
    /// Keep Unicode letters and digits as they are.
    Safe,
}

/// Lowercase `text`, drop `:.()`, and join the remaining alphanumeric
/// runs with single `-`. Leading and trailing separators never appear.
pub fn slugify(text: &str, mode: SlugMode) -> String {
    let text: Cow<'_, str> = match mode {
        SlugMode::Full => Cow::Owned(deunicode::deunicode(text)),
        SlugMode::Safe => Cow::Borrowed(text),
    };

    let mut slug = String::with_capacity(text.len());
    let mut pending_sep = false;
    for ch in text.chars().filter(|c| !STRIPPED.contains(c)) {
        for ch in ch.to_lowercase() {
            if ch.is_alphanumeric() {
                if pending_sep && !slug.is_empty() {
                    slug.push('-');
                }
                pending_sep = false;
                slug.push(ch);
            } else {
                pending_sep = true;
            }
        }
    }
    slug
}

/// `heading-<depth>-<slug>` with the default slug mode.
///
/// Identical text at the same depth yields identical ids; use
/// [`HeadingIds`] with deduplication to tell repeats apart.
pub fn heading_id(depth: usize, text: &str) -> String {
    heading_id_with(depth, text, SlugMode::default())
}

pub fn heading_id_with(depth: usize, text: &str, mode: SlugMode) -> String {
    format!("heading-{}-{}", depth, slugify(text, mode))
}

/// Id generator for the headings of one document.
///
/// With `dedupe` off every id is exactly [`heading_id`]. With `dedupe`
/// on, the n-th repeat of an id gets a `-n` suffix.
#[derive(Debug, Clone, Default)]
pub struct HeadingIds {
    mode: SlugMode,
    dedupe: bool,
    seen: FxHashMap<String, usize>,
}

impl HeadingIds {
    pub fn new(mode: SlugMode, dedupe: bool) -> Self {
        Self {
            mode,
            dedupe,
            seen: FxHashMap::default(),
        }
    }

    /// Id for the next heading in document order.
    pub fn assign(&mut self, depth: usize, text: &str) -> String {
        let id = heading_id_with(depth, text, self.mode);
        if !self.dedupe {
            return id;
        }
        let count = self.seen.entry(id.clone()).or_insert(0);
        let id = match *count {
            0 => id,
            n => format!("{id}-{n}"),
        };
        *count += 1;
        id
    }
}
