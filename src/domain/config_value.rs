// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw configuration value.
//!
//! Sources hand back a `ConfigValue` holding the exact text they store. Typed
//! access goes through [`ValueDecoder`](crate::ports::ValueDecoder).

use crate::domain::{ConfigKey, Result};
use crate::ports::ValueDecoder;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The undecoded text of a configuration value.
///
/// No trimming or other normalisation is ever applied.
///
/// # Examples
///
/// ```
/// use envcfg::domain::{ConfigKey, ConfigValue};
///
/// let value = ConfigValue::from("true");
/// let key = ConfigKey::from("FEATURE_X");
/// assert_eq!(value.as_str(), "true");
/// assert!(value.decode::<bool>(&key).unwrap());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigValue(String);

impl ConfigValue {
    /// Creates a new `ConfigValue` from a `String`.
    pub fn new(value: String) -> Self {
        ConfigValue(value)
    }

    /// Returns the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the value into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Decodes the value into `T`, naming `key` in any error.
    pub fn decode<T: ValueDecoder>(&self, key: &ConfigKey) -> Result<T> {
        T::decode(key, self)
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue(s.to_string())
    }
}

impl From<ConfigValue> for String {
    fn from(value: ConfigValue) -> Self {
        value.0
    }
}

impl AsRef<str> for ConfigValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
