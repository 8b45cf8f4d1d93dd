//! `[toc]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [toc]
//! slug = "full"         # full: transliterate to ASCII, safe: keep Unicode
//! dedupe_ids = false    # Suffix repeated heading ids with -1, -2, ...
//! ```

use serde::{Deserialize, Serialize};

use crate::toc::SlugMode;

/// Heading id settings shared by rendering and the table of contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TocConfig {
    pub slug: SlugMode,
    pub dedupe_ids: bool,
}
