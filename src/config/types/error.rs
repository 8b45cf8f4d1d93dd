//! Configuration error types.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading `folio.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("config file `{0}` not found")]
    NotFound(PathBuf),

    // No #[from]: a source() would print the diagnostics twice
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

/// One rejected field value.
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    pub field: FieldPath,
    pub message: String,
    pub hint: Option<String>,
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  {} {} {}", "→".red(), self.field, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n    {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

/// Every validation error of a config, reported together.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for `field`, with an optional fix hint.
    pub fn error(&mut self, field: FieldPath, message: impl Into<String>, hint: Option<String>) {
        self.errors.push(ConfigDiagnostic {
            field,
            message: message.into(),
            hint,
        });
    }

    /// Reject a zero count, pointing at the default that removing the key
    /// restores.
    pub fn require_positive(&mut self, field: FieldPath, value: usize, default: usize) {
        if value == 0 {
            self.error(
                field,
                "must be greater than 0",
                Some(format!("remove the key to use the default of {default}")),
            );
        }
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.errors.len();
        write!(
            f,
            "{} ({} {})",
            "invalid folio.toml".red().bold(),
            count,
            if count == 1 { "error" } else { "errors" }
        )?;
        for err in &self.errors {
            write!(f, "\n{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("folio.toml"),
            Error::new(ErrorKind::PermissionDenied, "permission denied"),
        );
        assert!(io_err.to_string().contains("`folio.toml`"));

        let missing = ConfigError::NotFound(PathBuf::from("site/folio.toml"));
        assert_eq!(missing.to_string(), "config file `site/folio.toml` not found");
    }

    #[test]
    fn test_require_positive() {
        let mut diag = ConfigDiagnostics::new();
        diag.require_positive(FieldPath::new("pagination.per_page"), 9, 9);
        assert!(diag.is_empty());

        diag.require_positive(FieldPath::new("pagination.per_page"), 0, 9);
        diag.require_positive(FieldPath::new("pagination.max_buttons"), 0, 5);
        assert_eq!(diag.len(), 2);
        assert_eq!(
            diag.errors()[1].hint.as_deref(),
            Some("remove the key to use the default of 5")
        );

        let display = diag.into_result().unwrap_err().to_string();
        assert!(display.contains("(2 errors)"));
        assert!(display.contains("pagination.per_page"));
        assert!(display.contains("pagination.max_buttons"));
        assert!(display.contains("default of 9"));
    }

    #[test]
    fn test_empty_diagnostics_ok() {
        assert!(ConfigDiagnostics::new().into_result().is_ok());
    }
}
