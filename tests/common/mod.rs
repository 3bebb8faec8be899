// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for integration tests.

use envcfg::domain::{ConfigKey, ConfigValue, Result};
use envcfg::ports::ConfigSource;
use std::collections::HashMap;
use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Sets or unsets environment variables for a test; every key it touched is removed on drop.
///
/// Every test uses its own variable names so that tests running in parallel
/// never observe each other's values.
#[allow(dead_code)]
pub struct EnvGuard {
    keys: Vec<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    pub fn new() -> Self {
        EnvGuard { keys: Vec::new() }
    }

    pub fn set(&mut self, key: &str, value: &str) {
        env::set_var(key, value);
        self.keys.push(key.to_string());
    }

    pub fn unset(&mut self, key: &str) {
        env::remove_var(key);
        self.keys.push(key.to_string());
    }

    #[cfg(unix)]
    pub fn set_bytes(&mut self, key: &str, value: &[u8]) {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        env::set_var(key, OsStr::from_bytes(value));
        self.keys.push(key.to_string());
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for key in &self.keys {
            env::remove_var(key);
        }
    }
}

/// A fixed source that counts how often it is queried.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct CountingSource {
    values: HashMap<String, String>,
    lookups: AtomicUsize,
}

#[allow(dead_code)]
impl CountingSource {
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl ConfigSource for CountingSource {
    fn name(&self) -> &str {
        "counting"
    }

    fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .values
            .get(key.as_str())
            .map(|v| ConfigValue::from(v.as_str())))
    }
}
