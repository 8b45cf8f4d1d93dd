//! `[render]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [render]
//! table_class = "table-wrapper"   # Class of the <div> around tables
//! line_numbers = false            # For code blocks without @showLineNumbers
//! ```

use serde::{Deserialize, Serialize};

/// Markdown rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub table_class: String,
    pub line_numbers: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            table_class: "table-wrapper".to_string(),
            line_numbers: false,
        }
    }
}
