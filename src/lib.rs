// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed accessors for configuration held in environment variables.
//!
//! An accessor (`Config<T>`) is bound to one key and reads it on demand,
//! either returning the current value (`get`) or falling back to a default
//! when the key is unset (`get_or_else`). Values are never cached.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`ConfigKey`, `ConfigValue`, `Config`, errors)
//! - **Ports**: Trait definitions (`ConfigSource`, `ValueDecoder`)
//! - **Adapters**: Source implementations (process environment, in-memory map)
//! - **Service**: The factories that hand out accessors
//!
//! # Supported Types
//!
//! - `String`: the raw value, untouched
//! - `bool`: the value parsed as JSON; only `true` and `false` decode
//!
//! A boolean variable holding anything else (`yes`, `1`, an empty string)
//! makes the read fail with [`ConfigError::DecodeError`](domain::ConfigError).
//! It is never treated as unset and never replaced by the default.
//!
//! # Feature Flags
//!
//! - `env`: Enable the process environment source and the `string_config` /
//!   `boolean_config` shorthands (default)
//!
//! # Quick Start
//!
//! ```rust
//! use envcfg::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let host = string_config("ENVCFG_DOC_QUICKSTART_HOST").get_or_else("localhost".to_string())?;
//! let debug = boolean_config("ENVCFG_DOC_QUICKSTART_DEBUG").get_or_else(false)?;
//! assert_eq!(host, "localhost");
//! assert!(!debug);
//! # Ok(())
//! # }
//! ```
//!
//! # Testing Without the Environment
//!
//! ```rust
//! use envcfg::prelude::*;
//! use std::sync::Arc;
//!
//! let source = Arc::new(InMemorySource::new().with_value("FEATURE_X", "true"));
//! let flags = ConfigFactory::<bool>::with_source(source);
//! assert_eq!(flags.create("FEATURE_X").get().unwrap(), Some(true));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::InMemorySource;
    pub use crate::domain::{
        or_else, Config, ConfigError, ConfigKey, ConfigValue, DecodeErrorKind, Result,
    };
    pub use crate::ports::{ConfigSource, ValueDecoder};
    pub use crate::service::ConfigFactory;

    // Re-export the environment source based on feature flags
    #[cfg(feature = "env")]
    pub use crate::adapters::EnvVarAdapter;
    #[cfg(feature = "env")]
    pub use crate::service::{boolean_config, string_config};
}
