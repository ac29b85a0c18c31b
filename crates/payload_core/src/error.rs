//! Error types for validator configuration.
//!
//! Bad *input* never surfaces as one of these: validators report it through
//! [`crate::ErrorDetail`]. A `ConfigError` means the schema definition itself
//! is wrong and is raised while constructing a validator.

use thiserror::Error;

/// Result type for validator construction.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while building a validator.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Option keys the validator kind does not recognize
    #[error("Unknown configuration keys for {validator}: {keys:?}")]
    UnknownOptions {
        /// Validator kind being configured
        validator: &'static str,
        /// Offending keys, sorted
        keys: Vec<String>,
    },

    /// A recognized option holds a value of the wrong shape
    #[error("Invalid configuration for {validator}: {source}")]
    InvalidOption {
        /// Validator kind being configured
        validator: &'static str,
        /// Underlying deserialization failure
        #[source]
        source: serde_json::Error,
    },

    /// Dynamic configuration was not a key/value mapping
    #[error("Configuration for {validator} must be an object")]
    NotAnObject {
        /// Validator kind being configured
        validator: &'static str,
    },

    /// Regex pattern does not compile
    #[error("Invalid regex pattern '{pattern}': {source}")]
    InvalidPattern {
        /// Pattern as supplied
        pattern: String,
        /// Compilation failure
        #[source]
        source: regex::Error,
    },
}

impl ConfigError {
    /// Creates a new unknown options error.
    pub fn unknown_options(validator: &'static str, keys: Vec<String>) -> Self {
        Self::UnknownOptions { validator, keys }
    }

    /// Creates a new invalid option error.
    pub fn invalid_option(validator: &'static str, source: serde_json::Error) -> Self {
        Self::InvalidOption { validator, source }
    }

    /// Creates a new invalid pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }
}
