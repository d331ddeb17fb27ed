//! Configuration management and validation.
//!
//! Provides the ingestion and aggregation settings, loaded from an optional
//! JSON file and overridden by command-line flags.

use crate::constants::{
    COMMA, DEFAULT_HIGHLIGHT_COUNT, DEFAULT_RANKING_SIZE, DELIMITER_SAMPLE_CHARS, SEMICOLON,
};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// How the field delimiter is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DelimiterPolicy {
    /// Compare comma and semicolon counts in a leading sample of the text
    Auto,
    /// Always split on the given character
    Fixed(char),
}

impl DelimiterPolicy {
    /// Resolve the delimiter for a concrete text
    pub fn resolve(self, text: &str, sample_chars: usize) -> char {
        match self {
            DelimiterPolicy::Fixed(delimiter) => delimiter,
            DelimiterPolicy::Auto => crate::app::services::csv_reader::detect_delimiter(
                text,
                sample_chars,
            ),
        }
    }
}

impl std::str::FromStr for DelimiterPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(DelimiterPolicy::Auto),
            "comma" | "," => Ok(DelimiterPolicy::Fixed(COMMA)),
            "semicolon" | ";" => Ok(DelimiterPolicy::Fixed(SEMICOLON)),
            "tab" | "\\t" => Ok(DelimiterPolicy::Fixed('\t')),
            other => Err(Error::configuration(format!(
                "Unknown delimiter '{}' (expected auto, comma, semicolon or tab)",
                other
            ))),
        }
    }
}

/// Settings for CSV ingestion and statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecapConfig {
    /// Delimiter selection policy
    pub delimiter: DelimiterPolicy,

    /// Characters sampled for delimiter auto-detection
    pub delimiter_sample_chars: usize,

    /// Entries kept in the author and publisher rankings
    pub ranking_size: usize,

    /// Number of top-rated books highlighted
    pub highlight_count: usize,
}

impl Default for RecapConfig {
    fn default() -> Self {
        Self {
            delimiter: DelimiterPolicy::Auto,
            delimiter_sample_chars: DELIMITER_SAMPLE_CHARS,
            ranking_size: DEFAULT_RANKING_SIZE,
            highlight_count: DEFAULT_HIGHLIGHT_COUNT,
        }
    }
}

impl RecapConfig {
    /// Load configuration from a JSON file, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            debug!("No config file given, using defaults");
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read config file {}", path.display()), e)
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            Error::serialization(format!("Invalid config file {}", path.display()), e)
        })?;

        debug!("Loaded configuration from {}: {:?}", path.display(), config);
        config.validate()?;
        Ok(config)
    }

    /// Use a fixed delimiter or auto-detection
    pub fn with_delimiter(mut self, delimiter: DelimiterPolicy) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the number of entries in author and publisher rankings
    pub fn with_ranking_size(mut self, ranking_size: usize) -> Self {
        self.ranking_size = ranking_size;
        self
    }

    /// Set the number of highlighted books
    pub fn with_highlight_count(mut self, highlight_count: usize) -> Self {
        self.highlight_count = highlight_count;
        self
    }

    /// Check that the settings are usable
    pub fn validate(&self) -> Result<()> {
        if let DelimiterPolicy::Fixed(delimiter) = self.delimiter {
            if delimiter == '"' || delimiter == '\n' || delimiter == '\r' {
                return Err(Error::configuration(format!(
                    "Delimiter {:?} cannot be used to split fields",
                    delimiter
                )));
            }
        }

        if self.delimiter_sample_chars == 0 {
            return Err(Error::configuration(
                "delimiter_sample_chars must be greater than zero",
            ));
        }

        if self.ranking_size == 0 {
            return Err(Error::configuration("ranking_size must be greater than zero"));
        }

        Ok(())
    }
}
