// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing configuration source implementations.
//!
//! Each adapter implements the `ConfigSource` trait from the ports layer for
//! one concrete key-value table.

#[cfg(feature = "env")]
pub mod env_var;
pub mod in_memory;

// Re-export adapters based on feature flags
#[cfg(feature = "env")]
pub use env_var::EnvVarAdapter;
pub use in_memory::InMemorySource;
