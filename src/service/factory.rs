// SPDX-License-Identifier: MIT OR Apache-2.0

//! Accessor factories.
//!
//! A [`ConfigFactory<T>`] turns key names into [`Config<T>`] accessors bound
//! to one source. [`string_config`] and [`boolean_config`] are the shorthands
//! for factories bound to the process environment.

use crate::domain::{Config, ConfigKey};
use crate::ports::{ConfigSource, ValueDecoder};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Produces accessors of type `T` for keys in a single source.
///
/// Any key is accepted and looked up verbatim; no format validation is done.
///
/// # Examples
///
/// ```rust
/// use envcfg::adapters::InMemorySource;
/// use envcfg::service::ConfigFactory;
/// use std::sync::Arc;
///
/// let source = Arc::new(InMemorySource::new().with_value("FEATURE_X", "true"));
/// let flags = ConfigFactory::<bool>::with_source(source);
///
/// assert!(flags.create("FEATURE_X").get_or_else(false).unwrap());
/// assert!(!flags.create("FEATURE_Y").get_or_else(false).unwrap());
/// ```
pub struct ConfigFactory<T> {
    source: Arc<dyn ConfigSource>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: ValueDecoder> ConfigFactory<T> {
    /// Creates a factory whose accessors read from `source`.
    pub fn with_source(source: Arc<dyn ConfigSource>) -> Self {
        Self {
            source,
            _marker: PhantomData,
        }
    }

    /// Creates a factory whose accessors read from the process environment.
    #[cfg(feature = "env")]
    pub fn from_env() -> Self {
        Self::with_source(Arc::new(crate::adapters::EnvVarAdapter::new()))
    }

    /// Creates an accessor bound to `key`.
    pub fn create(&self, key: impl Into<ConfigKey>) -> Config<T> {
        Config::new(key, Arc::clone(&self.source))
    }
}

impl<T> Clone for ConfigFactory<T> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for ConfigFactory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigFactory")
            .field("source", &self.source.name())
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}

#[cfg(feature = "env")]
impl<T: ValueDecoder> Default for ConfigFactory<T> {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Creates a string accessor for the environment variable `key`.
///
/// # Examples
///
/// ```rust
/// use envcfg::service::string_config;
///
/// let host = string_config("ENVCFG_DOC_DB_HOST");
/// assert_eq!(host.get_or_else("localhost".to_string()).unwrap(), "localhost");
/// ```
#[cfg(feature = "env")]
pub fn string_config(key: impl Into<ConfigKey>) -> Config<String> {
    ConfigFactory::<String>::from_env().create(key)
}

/// Creates a boolean accessor for the environment variable `key`.
///
/// The variable must hold a JSON boolean (`true` or `false`). Any other value
/// makes `get` and `get_or_else` fail with a decode error.
///
/// # Examples
///
/// ```rust
/// use envcfg::service::boolean_config;
///
/// let debug = boolean_config("ENVCFG_DOC_DEBUG");
/// assert!(!debug.get_or_else(false).unwrap());
/// ```
#[cfg(feature = "env")]
pub fn boolean_config(key: impl Into<ConfigKey>) -> Config<bool> {
    ConfigFactory::<bool>::from_env().create(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemorySource;
    use crate::domain::ConfigError;

    fn source() -> Arc<InMemorySource> {
        Arc::new(
            InMemorySource::new()
                .with_value("DB_HOST", "db.internal")
                .with_value("FEATURE_X", "true")
                .with_value("FEATURE_Y", "yes"),
        )
    }

    #[test]
    fn test_factory_create_binds_key() {
        let factory = ConfigFactory::<String>::with_source(source());
        let config = factory.create("DB_HOST");
        assert_eq!(config.key().as_str(), "DB_HOST");
        assert_eq!(config.source_name(), "memory");
        assert_eq!(config.get().unwrap().as_deref(), Some("db.internal"));
    }

    #[test]
    fn test_factory_accessors_share_source() {
        let shared = source();
        let factory = ConfigFactory::<String>::with_source(shared.clone());
        let a = factory.create("NEW_KEY");
        let b = factory.clone().create("NEW_KEY");

        shared.set("NEW_KEY", "v").unwrap();
        assert_eq!(a.get().unwrap().as_deref(), Some("v"));
        assert_eq!(b.get().unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_factory_bool() {
        let factory = ConfigFactory::<bool>::with_source(source());
        assert_eq!(factory.create("FEATURE_X").get().unwrap(), Some(true));
        assert_eq!(factory.create("MISSING").get().unwrap(), None);
        assert!(matches!(
            factory.create("FEATURE_Y").get(),
            Err(ConfigError::DecodeError { .. })
        ));
    }

    #[test]
    fn test_factory_accepts_any_key() {
        let factory = ConfigFactory::<String>::with_source(source());
        for key in ["", "with space", "dotted.key", "UNSET"] {
            assert_eq!(factory.create(key).get().unwrap(), None);
        }
    }

    #[test]
    fn test_factory_debug() {
        let factory = ConfigFactory::<bool>::with_source(source());
        let debug = format!("{:?}", factory);
        assert!(debug.contains("memory"));
        assert!(debug.contains("bool"));
    }

    #[cfg(feature = "env")]
    #[test]
    fn test_env_factories_use_env_source() {
        assert_eq!(string_config("ENVCFG_FACTORY_UNSET").source_name(), "env");
        assert_eq!(boolean_config("ENVCFG_FACTORY_UNSET").source_name(), "env");
        assert_eq!(ConfigFactory::<bool>::default().create("X").source_name(), "env");
    }
}
