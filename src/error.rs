//! Error handling for reading-log ingestion.
//!
//! Only schema resolution failures surface from the core pipeline; malformed
//! cells degrade to empty values instead of erroring. The remaining variants
//! belong to the boundary (file reading, configuration, report output).

use thiserror::Error;

/// Result type alias for reading recap operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for reading recap operations
#[derive(Error, Debug)]
pub enum Error {
    /// Required columns could not be resolved from the header row
    #[error("Missing required column(s): {}", missing.join(", "))]
    Schema { missing: Vec<String> },

    /// Rating value outside the five-star scale
    #[error("Invalid rating {value}: must lie between 0 and 5")]
    InvalidRating { value: f64 },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// JSON (de)serialization failed
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create a schema error naming the missing fields
    pub fn schema<I, S>(missing: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Schema {
            missing: missing.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an invalid rating error
    pub fn invalid_rating(value: f64) -> Self {
        Self::InvalidRating { value }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Whether this error came from the CSV header rather than the environment
    pub fn is_schema_error(&self) -> bool {
        matches!(self, Self::Schema { .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON processing failed".to_string(),
            source: error,
        }
    }
}
