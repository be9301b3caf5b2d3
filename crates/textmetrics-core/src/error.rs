//! Error types for textmetrics-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur during text analysis.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalysisError {
    /// The search term is empty once surrounding whitespace is removed.
    #[error("search term is empty")]
    EmptySearchTerm,

    /// The search term could not be compiled into a matcher.
    #[error("invalid search term: {0}")]
    InvalidSearchTerm(String),

    /// A reading speed of zero words per minute was requested.
    #[error("reading speed must be at least 1 word per minute (got {0})")]
    InvalidReadingSpeed(u32),
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
