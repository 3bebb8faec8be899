// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the accessor factories.
//!
//! Factories are the entry point of the crate: they bind key names to a
//! source and hand back typed `Config<T>` accessors.

pub mod factory;

// Re-export commonly used types
pub use factory::ConfigFactory;
#[cfg(feature = "env")]
pub use factory::{boolean_config, string_config};
