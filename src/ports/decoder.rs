// SPDX-License-Identifier: MIT OR Apache-2.0

//! Value decoder trait definition.
//!
//! `ValueDecoder` turns the raw text a source returns into a typed value.
//! Every type an accessor can be declared over implements it. Two
//! implementations ship with the crate:
//!
//! - `String`: the raw text, unchanged
//! - `bool`: the text parsed as a JSON document that must hold a boolean
//!
//! # Boolean decoding
//!
//! Booleans are read as JSON, so only `true` and `false` (optionally padded
//! with JSON whitespace) decode. Common spellings such as `yes`, `1`, `on` or
//! `TRUE` are rejected with [`ConfigError::DecodeError`].

use crate::domain::{ConfigError, ConfigKey, ConfigValue, Result};

/// A type that can be decoded from a raw configuration value.
///
/// # Examples
///
/// ```rust
/// use envcfg::domain::{ConfigKey, ConfigValue, Result};
/// use envcfg::ports::ValueDecoder;
///
/// struct Upper(String);
///
/// impl ValueDecoder for Upper {
///     const TYPE_NAME: &'static str = "upper";
///
///     fn decode(_key: &ConfigKey, raw: &ConfigValue) -> Result<Self> {
///         Ok(Upper(raw.as_str().to_uppercase()))
///     }
/// }
///
/// let key = ConfigKey::from("NAME");
/// let value = ConfigValue::from("app");
/// assert_eq!(Upper::decode(&key, &value).unwrap().0, "APP");
/// ```
pub trait ValueDecoder: Sized {
    /// Name of the target type, used in error messages.
    const TYPE_NAME: &'static str;

    /// Decodes `raw`, which was stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DecodeError`] when `raw` is not a valid
    /// representation of `Self`.
    fn decode(key: &ConfigKey, raw: &ConfigValue) -> Result<Self>;
}

impl ValueDecoder for String {
    const TYPE_NAME: &'static str = "string";

    fn decode(_key: &ConfigKey, raw: &ConfigValue) -> Result<Self> {
        Ok(raw.as_str().to_string())
    }
}

impl ValueDecoder for bool {
    const TYPE_NAME: &'static str = "boolean";

    fn decode(key: &ConfigKey, raw: &ConfigValue) -> Result<Self> {
        serde_json::from_str::<bool>(raw.as_str()).map_err(|e| {
            tracing::debug!(
                "Failed to decode value of '{}' as {}: {}",
                key,
                Self::TYPE_NAME,
                e
            );
            ConfigError::from_json_error(key.as_str().to_string(), Self::TYPE_NAME, e)
        })
    }
}
