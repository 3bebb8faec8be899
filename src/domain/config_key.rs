// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lookup key newtype.
//!
//! A `ConfigKey` is the name a value is looked up under, e.g. the environment
//! variable name `DB_HOST`. Keys are used verbatim: no case folding, no prefix
//! handling and no validation. The empty string is a legal key.

use std::fmt;

/// The name of a configuration value in its source.
///
/// # Examples
///
/// ```
/// use envcfg::domain::ConfigKey;
///
/// let key = ConfigKey::from("DB_HOST");
/// assert_eq!(key.as_str(), "DB_HOST");
/// assert_eq!(key.to_string(), "DB_HOST");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new `ConfigKey` from a `String`.
    pub fn new(key: String) -> Self {
        ConfigKey(key)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ConfigKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey(s.to_string())
    }
}

impl From<&ConfigKey> for ConfigKey {
    fn from(key: &ConfigKey) -> Self {
        key.clone()
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
