//! `[pagination]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [pagination]
//! per_page = 9          # Items per listing page
//! max_buttons = 5       # Page buttons in the full strip
//! base_path = "/blog"   # Link of page 1; page n is "<base_path>/n"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::paginate::DEFAULT_MAX_BUTTONS;

const DEFAULT_PER_PAGE: usize = 9;

/// Listing pagination settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub per_page: usize,
    pub max_buttons: usize,
    pub base_path: String,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            max_buttons: DEFAULT_MAX_BUTTONS,
            base_path: "/blog".to_string(),
        }
    }
}

impl PaginationConfig {
    pub const PER_PAGE: FieldPath = FieldPath::new("pagination.per_page");
    pub const MAX_BUTTONS: FieldPath = FieldPath::new("pagination.max_buttons");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        diag.require_positive(Self::PER_PAGE, self.per_page, DEFAULT_PER_PAGE);
        diag.require_positive(Self::MAX_BUTTONS, self.max_buttons, DEFAULT_MAX_BUTTONS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_pagination_config() {
        let config = test_parse_config(
            "[pagination]\nper_page = 10\nmax_buttons = 7\nbase_path = \"/posts\"",
        );
        assert_eq!(config.pagination.per_page, 10);
        assert_eq!(config.pagination.max_buttons, 7);
        assert_eq!(config.pagination.base_path, "/posts");
    }

    #[test]
    fn test_pagination_config_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.pagination.per_page, 9);
        assert_eq!(config.pagination.max_buttons, 5);
        assert_eq!(config.pagination.base_path, "/blog");
    }

    #[test]
    fn test_pagination_validate() {
        let mut diag = ConfigDiagnostics::new();
        PaginationConfig::default().validate(&mut diag);
        assert!(diag.is_empty());

        let config = PaginationConfig {
            per_page: 0,
            max_buttons: 0,
            ..PaginationConfig::default()
        };
        config.validate(&mut diag);
        assert_eq!(diag.len(), 2);
        assert_eq!(diag.errors()[0].field, PaginationConfig::PER_PAGE);
    }
}
