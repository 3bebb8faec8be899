// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for configuration accessors.
//!
//! An unset key is not an error: accessors report it as `Ok(None)`. The
//! variants here cover values that are present but cannot be decoded, and
//! sources that cannot answer at all.

use std::fmt;
use thiserror::Error;

/// The main error type for configuration reads.
///
/// # Examples
///
/// ```
/// use envcfg::domain::errors::ConfigError;
///
/// fn read_host() -> Result<String, ConfigError> {
///     Err(ConfigError::SourceError {
///         source_name: "memory".to_string(),
///         message: "value table lock poisoned".to_string(),
///         source: None,
///     })
/// }
///
/// assert!(read_host().is_err());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A value was present but could not be decoded to the requested type.
    #[error("Failed to decode configuration value for key '{key}' as {target_type} ({kind}): {source}")]
    DecodeError {
        /// The key being decoded
        key: String,
        /// The target type name
        target_type: String,
        /// Whether the raw text was malformed or merely the wrong type
        kind: DecodeErrorKind,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The configuration source could not produce a value.
    #[error("Configuration source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Classification of a [`ConfigError::DecodeError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// The raw text is not a valid JSON document (e.g. `maybe`, or an empty string).
    Syntax,
    /// The raw text is valid JSON holding a value of another type (e.g. `1`, `{}`).
    Type,
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeErrorKind::Syntax => write!(f, "syntax"),
            DecodeErrorKind::Type => write!(f, "type"),
        }
    }
}

impl ConfigError {
    /// Creates a `DecodeError` from a `serde_json::Error`, classifying it.
    pub fn from_json_error(key: String, target_type: &str, err: serde_json::Error) -> Self {
        let kind = match err.classify() {
            serde_json::error::Category::Data => DecodeErrorKind::Type,
            _ => DecodeErrorKind::Syntax,
        };
        ConfigError::DecodeError {
            key,
            target_type: target_type.to_string(),
            kind,
            source: err,
        }
    }

    /// Returns the decode classification if this is a `DecodeError`.
    pub fn decode_kind(&self) -> Option<DecodeErrorKind> {
        match self {
            ConfigError::DecodeError { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
