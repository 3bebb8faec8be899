// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory configuration source adapter.
//!
//! `InMemorySource` stands in for the process environment wherever touching
//! process-wide state is undesirable, most often in tests. Values can be
//! changed after accessors have been created, and those accessors see the
//! change on their next read.

use crate::domain::{ConfigError, ConfigKey, ConfigValue, Result};
use crate::ports::ConfigSource;
use std::collections::HashMap;
use std::sync::RwLock;

/// Configuration source backed by a `HashMap<String, String>`.
///
/// # Examples
///
/// ```rust
/// use envcfg::adapters::InMemorySource;
/// use envcfg::ports::ConfigSource;
///
/// let source = InMemorySource::new().with_value("DB_HOST", "db.internal");
/// assert_eq!(source.get_str("DB_HOST").unwrap().unwrap().as_str(), "db.internal");
///
/// source.remove("DB_HOST").unwrap();
/// assert!(source.get_str("DB_HOST").unwrap().is_none());
/// ```
#[derive(Debug, Default)]
pub struct InMemorySource {
    values: RwLock<HashMap<String, String>>,
}

impl InMemorySource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source holding `values`.
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self {
            values: RwLock::new(values),
        }
    }

    /// Adds a value, builder style.
    pub fn with_value(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut values = self.into_values();
        values.insert(key.into(), value.into());
        Self::with_values(values)
    }

    /// Sets `key` to `value`, replacing any previous value.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) -> Result<()> {
        let mut values = self.values.write().map_err(|_| self.poisoned())?;
        values.insert(key.into(), value.into());
        Ok(())
    }

    /// Unsets `key`. Returns the previous value, if any.
    pub fn remove(&self, key: &str) -> Result<Option<String>> {
        let mut values = self.values.write().map_err(|_| self.poisoned())?;
        Ok(values.remove(key))
    }

    fn into_values(self) -> HashMap<String, String> {
        // A poisoned map is still a valid map.
        self.values
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn poisoned(&self) -> ConfigError {
        ConfigError::SourceError {
            source_name: self.name().to_string(),
            message: "value table lock poisoned".to_string(),
            source: None,
        }
    }
}

impl From<HashMap<String, String>> for InMemorySource {
    fn from(values: HashMap<String, String>) -> Self {
        Self::with_values(values)
    }
}

impl ConfigSource for InMemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
        let values = self.values.read().map_err(|_| self.poisoned())?;
        Ok(values
            .get(key.as_str())
            .map(|v| ConfigValue::from(v.as_str())))
    }
}
