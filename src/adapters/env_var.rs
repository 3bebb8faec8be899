// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable configuration source adapter.
//!
//! This module provides an adapter that reads configuration values from the
//! process environment.

use crate::domain::{ConfigKey, ConfigValue, Result};
use crate::ports::ConfigSource;
use std::env;

/// Configuration source adapter for the process environment.
///
/// Each lookup reads the environment at call time, using the key verbatim as
/// the variable name. Nothing is cached, and the adapter never writes to the
/// environment.
///
/// Keys that cannot name an environment variable (empty, or containing `=`
/// or a NUL byte) are reported as unset. Values that are not valid unicode
/// are decoded lossily, with U+FFFD in place of each invalid sequence.
///
/// # Examples
///
/// ```rust
/// use envcfg::adapters::EnvVarAdapter;
/// use envcfg::ports::ConfigSource;
///
/// let adapter = EnvVarAdapter::new();
/// assert_eq!(adapter.name(), "env");
/// assert!(adapter.get_str("ENVCFG_DOC_SURELY_UNSET").unwrap().is_none());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvVarAdapter;

impl EnvVarAdapter {
    /// Creates a new environment variable adapter.
    pub fn new() -> Self {
        EnvVarAdapter
    }
}

impl ConfigSource for EnvVarAdapter {
    fn name(&self) -> &str {
        "env"
    }

    fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
        Ok(env::var_os(key.as_str()).map(|raw| match raw.into_string() {
            Ok(value) => ConfigValue::from(value),
            Err(raw) => {
                tracing::debug!(
                    "Environment variable '{}' is not valid unicode, decoding lossily",
                    key
                );
                ConfigValue::from(raw.to_string_lossy().into_owned())
            }
        }))
    }
}
