//! Configuration management for `folio.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [content] [pagination] [render] [toc]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # Config file discovery
//! └── mod.rs         # FolioConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section          | Purpose                                      |
//! |------------------|----------------------------------------------|
//! | `[content]`      | Content root for `list` and `tags`           |
//! | `[pagination]`   | Page size, button count, listing base path   |
//! | `[render]`       | Table wrapper class, default line numbers    |
//! | `[toc]`          | Heading id slug mode and deduplication       |
//!
//! The file is optional: without one every section takes its defaults.

pub mod section;
pub mod types;
mod util;

pub use section::{ContentConfig, PaginationConfig, RenderConfig, TocConfig};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub use util::{find_config_file, find_config_file_from};

use crate::cli::{Cli, Commands};
use crate::markdown::RenderOptions;
use crate::{debug, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Config file searched for when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "folio.toml";

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FolioConfig {
    /// Path to the config file, empty when none was found (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Directory relative paths resolve against (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub pagination: PaginationConfig,

    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub toc: TocConfig,
}

impl FolioConfig {
    /// Load configuration for a CLI invocation.
    ///
    /// An explicit `--config` must exist. Otherwise `folio.toml` is searched
    /// upward from cwd and defaults apply when there is none. The root is
    /// the config file's directory, or cwd when there is no config file.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let found = match &cli.config {
            Some(explicit) => {
                let path = cwd.join(explicit);
                if !path.is_file() {
                    return Err(ConfigError::NotFound(explicit.clone()).into());
                }
                Some(path)
            }
            None => find_config_file(Path::new(DEFAULT_CONFIG)),
        };

        let mut config = match found {
            Some(path) => {
                debug!("config"; "using {}", path.display());
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                config.config_path = path;
                config
            }
            None => {
                debug!("config"; "{} not found, using defaults", DEFAULT_CONFIG);
                Self {
                    root: cwd,
                    ..Self::default()
                }
            }
        };

        config.apply_command_options(cli);
        config.normalize_paths();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Markdown render options from `[render]` and `[toc]`.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            table_class: self.render.table_class.clone(),
            line_numbers: self.render.line_numbers,
            slug: self.toc.slug,
            dedupe_ids: self.toc.dedupe_ids,
        }
    }

    /// Absolute content root.
    pub fn content_dir(&self) -> &Path {
        &self.content.dir
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        Self::update_option(&mut self.content.dir, cli.content.as_ref());

        match &cli.command {
            Commands::Paginate {
                per_page,
                max_buttons,
                base,
                ..
            } => {
                Self::update_option(&mut self.pagination.per_page, per_page.as_ref());
                Self::update_option(&mut self.pagination.max_buttons, max_buttons.as_ref());
                Self::update_option(&mut self.pagination.base_path, base.as_ref());
            }
            Commands::List { args } => {
                Self::update_option(&mut self.pagination.per_page, args.per_page.as_ref());
            }
            Commands::Render { line_numbers, .. } => {
                Self::update_option(&mut self.render.line_numbers, line_numbers.as_ref());
            }
            Commands::Code { .. }
            | Commands::Ranges { .. }
            | Commands::Toc { .. }
            | Commands::Tags { .. } => {}
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve the content root against the config directory.
    fn normalize_paths(&mut self) {
        if self.content.dir.is_relative() {
            self.content.dir = self.root.join(&self.content.dir);
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration, collecting all errors before failing.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();
        self.pagination.validate(&mut diag);
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> FolioConfig {
    let (parsed, ignored) = FolioConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
