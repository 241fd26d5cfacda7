//! Error types for word cloud operations.
//!
//! Only dataset loading and configuration can fail. Layout, rendering, and
//! event handling are infallible at this level.

use thiserror::Error;

/// Core error type for word cloud operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // Loading errors
    #[error("failed to fetch resource '{resource}': {reason}")]
    ResourceUnavailable { resource: String, reason: String },

    #[error("failed to parse CSV resource '{resource}': {reason}")]
    CsvParse { resource: String, reason: String },

    #[error("resource '{resource}' is missing column '{column}'")]
    MissingColumn { resource: String, column: String },

    #[error("one or both CSV files failed to load")]
    InitializationAborted,

    #[error("datasets are already loaded")]
    AlreadyLoaded,

    // Configuration errors
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl Error {
    /// Create a resource fetch error.
    pub fn resource_unavailable(resource: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ResourceUnavailable {
            resource: resource.into(),
            reason: reason.into(),
        }
    }

    /// Create a CSV parse error.
    pub fn csv_parse(resource: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::CsvParse {
            resource: resource.into(),
            reason: reason.into(),
        }
    }

    /// Create a missing column error.
    pub fn missing_column(resource: impl Into<String>, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            resource: resource.into(),
            column: column.into(),
        }
    }

    /// Create a configuration error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

/// Result type alias for word cloud operations.
pub type Result<T> = std::result::Result<T, Error>;
