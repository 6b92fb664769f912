//! Verifier configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_verifier::Symbols;
use tracing::{debug, info, instrument};

/// How a verification result is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report lines.
    #[default]
    Text,
    /// The result record as JSON.
    Json,
}

/// Configuration for the verdict CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct VerdictConfig {
    /// Spelling of X, O and empty cells in input boards.
    #[serde(default)]
    symbols: Symbols,

    /// Default output format.
    #[serde(default)]
    output: OutputFormat,

    /// Echo the parsed board before the report.
    #[serde(default)]
    show_board: bool,
}

impl VerdictConfig {
    /// Creates a configuration, rejecting unusable symbol sets.
    #[instrument]
    pub fn new(
        symbols: Symbols,
        output: OutputFormat,
        show_board: bool,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            symbols,
            output,
            show_board,
        };
        config.check()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.check()?;
        info!(symbols = ?config.symbols, output = ?config.output, "Config loaded successfully");
        Ok(config)
    }

    /// Returns a copy with CLI overrides applied.
    #[instrument(skip(self))]
    pub fn with_overrides(&self, output: Option<OutputFormat>, show_board: bool) -> Self {
        Self {
            symbols: self.symbols.clone(),
            output: output.unwrap_or(self.output),
            show_board: self.show_board || show_board,
        }
    }

    fn check(&self) -> Result<(), ConfigError> {
        match self.symbols.conflict() {
            Some(conflict) => Err(ConfigError::new(format!("Invalid symbols: {}", conflict))),
            None => Ok(()),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = VerdictConfig::from_toml("").unwrap();
        assert_eq!(config, VerdictConfig::default());
    }

    #[test]
    fn test_partial_symbols_keep_defaults() {
        let config = VerdictConfig::from_toml("[symbols]\nempty = \".\"\n").unwrap();
        assert_eq!(config.symbols(), &Symbols::new("X", "O", "."));
    }

    #[test]
    fn test_duplicate_symbols_rejected() {
        let err = VerdictConfig::from_toml("[symbols]\nx = \"O\"\n").unwrap_err();
        assert!(err.message.contains("Invalid symbols"));
    }

    #[test]
    fn test_overrides() {
        let config = VerdictConfig::default().with_overrides(Some(OutputFormat::Json), true);
        assert_eq!(config.output(), &OutputFormat::Json);
        assert!(*config.show_board());
        let unchanged = config.with_overrides(None, false);
        assert_eq!(unchanged.output(), &OutputFormat::Json);
        assert!(*unchanged.show_board());
    }

    #[test]
    fn test_new_rejects_empty_symbol() {
        assert!(VerdictConfig::new(Symbols::new("X", "", "-"), OutputFormat::Text, false).is_err());
    }
}
