// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed configuration accessor.
//!
//! A [`Config<T>`] is bound to one key and one source. It holds no value of
//! its own: every call to [`Config::get`] or [`Config::get_or_else`] queries
//! the source again, so the result always reflects the source's current state.

use crate::domain::{ConfigKey, Result};
use crate::ports::{ConfigSource, ValueDecoder};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Wraps a getter so that an absent result is replaced by a default.
///
/// The returned function calls `getter` each time it is invoked. `Ok(None)`
/// becomes `Ok(default)`; present values and errors pass through unchanged.
///
/// # Examples
///
/// ```
/// use envcfg::domain::or_else;
///
/// let unset = or_else(|| Ok(None::<String>));
/// assert_eq!(unset("localhost".to_string()).unwrap(), "localhost");
///
/// let set = or_else(|| Ok(Some(true)));
/// assert!(set(false).unwrap());
/// ```
pub fn or_else<T, G>(getter: G) -> impl Fn(T) -> Result<T>
where
    G: Fn() -> Result<Option<T>>,
{
    move |default| Ok(getter()?.unwrap_or(default))
}

/// An accessor for the value of type `T` stored under one key.
///
/// Accessors are created by a [`ConfigFactory`](crate::service::ConfigFactory)
/// or the [`string_config`](crate::service::string_config) and
/// [`boolean_config`](crate::service::boolean_config) shorthands. They are
/// cheap to clone and can be shared between threads.
///
/// # Examples
///
/// ```
/// use envcfg::adapters::InMemorySource;
/// use envcfg::domain::Config;
/// use std::sync::Arc;
///
/// let source = Arc::new(InMemorySource::new().with_value("FEATURE_X", "true"));
/// let feature: Config<bool> = Config::new("FEATURE_X", source.clone());
/// assert_eq!(feature.get().unwrap(), Some(true));
///
/// let host: Config<String> = Config::new("DB_HOST", source);
/// assert_eq!(host.get_or_else("localhost".to_string()).unwrap(), "localhost");
/// ```
pub struct Config<T> {
    key: ConfigKey,
    source: Arc<dyn ConfigSource>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: ValueDecoder> Config<T> {
    /// Binds an accessor to `key` in `source`.
    pub fn new(key: impl Into<ConfigKey>, source: Arc<dyn ConfigSource>) -> Self {
        Self {
            key: key.into(),
            source,
            _marker: PhantomData,
        }
    }

    /// Reads the current value.
    ///
    /// Returns `Ok(None)` when the key is not set.
    ///
    /// # Errors
    ///
    /// Fails when the value is set but does not decode as `T`, or when the
    /// source cannot answer. A value that fails to decode is never reported
    /// as absent.
    pub fn get(&self) -> Result<Option<T>> {
        let raw = self.source.get(&self.key)?;
        tracing::trace!(
            "Lookup of '{}' in source '{}': {}",
            self.key,
            self.source.name(),
            if raw.is_some() { "hit" } else { "miss" }
        );
        raw.map(|value| value.decode::<T>(&self.key)).transpose()
    }

    /// Reads the current value, or returns `default` when the key is not set.
    ///
    /// # Errors
    ///
    /// Same as [`Config::get`]. The default is only used for an absent key,
    /// never in place of a value that failed to decode.
    pub fn get_or_else(&self, default: T) -> Result<T> {
        or_else(|| self.get())(default)
    }
}

impl<T> Config<T> {
    /// Returns the key this accessor reads.
    pub fn key(&self) -> &ConfigKey {
        &self.key
    }

    /// Returns the name of the backing source.
    pub fn source_name(&self) -> &str {
        self.source.name()
    }
}

impl<T> Clone for Config<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            source: Arc::clone(&self.source),
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Config<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("key", &self.key)
            .field("source", &self.source.name())
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}
