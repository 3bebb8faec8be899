// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! Keys, raw values, errors and the typed accessor itself live here. Nothing
//! in this layer knows where values come from; that is the job of the
//! `ConfigSource` implementations in the adapters layer.

pub mod config;
pub mod config_key;
pub mod config_value;
pub mod errors;

// Re-export commonly used types
pub use config::{or_else, Config};
pub use config_key::ConfigKey;
pub use config_value::ConfigValue;
pub use errors::{ConfigError, DecodeErrorKind, Result};
