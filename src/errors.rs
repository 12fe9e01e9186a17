//! Error types for lexicon and configuration loading.
//!
//! Classification, aggregation and scaling never fail; zero denominators
//! resolve to `0.0` and empty lexicon groups simply never match.

use thiserror::Error;

/// Errors that can occur while loading lexicons or configuration.
#[derive(Debug, Error)]
pub enum FlsError {
    /// Error reading a lexicon or configuration file.
    #[error("failed to load {path}: {message}")]
    Load { path: String, message: String },

    /// Error parsing or validating configuration.
    #[error("invalid configuration: {message}")]
    Config { message: String },

    /// A match strategy name that is not recognized.
    #[error("unknown match strategy `{0}` (expected `substring` or `exact-token`)")]
    UnknownStrategy(String),
}

/// Result type for loading operations.
pub type FlsResult<T> = Result<T, FlsError>;
