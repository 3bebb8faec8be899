// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration source trait definition.
//!
//! This module defines the `ConfigSource` trait, the port through which
//! accessors read the key-value table that backs them. The process environment
//! is one implementation; an in-memory map is another, and is what tests and
//! embedders inject when they must not touch process-wide state.

use crate::domain::{ConfigKey, ConfigValue, Result};

/// A read-only key-value table that accessors query.
///
/// Implementations must answer from their current state on every call.
/// Accessors never cache, so a source that caches would make them stale.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so that accessors can be shared
/// across threads.
///
/// # Examples
///
/// ```rust
/// use envcfg::ports::ConfigSource;
/// use envcfg::domain::{ConfigKey, ConfigValue, Result};
///
/// struct Fixed;
///
/// impl ConfigSource for Fixed {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
///         if key.as_str() == "DB_HOST" {
///             Ok(Some(ConfigValue::from("db.internal")))
///         } else {
///             Ok(None)
///         }
///     }
/// }
///
/// let source = Fixed;
/// assert!(source.get_str("DB_HOST").unwrap().is_some());
/// assert!(source.get_str("DB_PORT").unwrap().is_none());
/// ```
pub trait ConfigSource: Send + Sync {
    /// Returns the name of this source, used in logs and error messages.
    fn name(&self) -> &str;

    /// Looks up the raw value stored under `key`.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(ConfigValue))` - The key is set
    /// * `Ok(None)` - The key is not set
    /// * `Err(ConfigError)` - The source could not answer
    fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>>;

    /// Looks up a key given as a string slice.
    fn get_str(&self, key: &str) -> Result<Option<ConfigValue>> {
        self.get(&ConfigKey::from(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoSource;

    impl ConfigSource for EchoSource {
        fn name(&self) -> &str {
            "echo"
        }

        fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
            if key.as_str().is_empty() {
                Ok(None)
            } else {
                Ok(Some(ConfigValue::from(key.as_str())))
            }
        }
    }

    #[test]
    fn test_config_source_name() {
        assert_eq!(EchoSource.name(), "echo");
    }

    #[test]
    fn test_config_source_get_str_delegates() {
        let value = EchoSource.get_str("APP_NAME").unwrap().unwrap();
        assert_eq!(value.as_str(), "APP_NAME");
        assert!(EchoSource.get_str("").unwrap().is_none());
    }

    #[test]
    fn test_config_source_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn ConfigSource>();
    }
}
