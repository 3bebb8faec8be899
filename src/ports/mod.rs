// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! These traits are the seams of the crate: `ConfigSource` is implemented by
//! the adapters layer, `ValueDecoder` by every type an accessor can produce.

pub mod decoder;
pub mod source;

// Re-export commonly used types
pub use decoder::ValueDecoder;
pub use source::ConfigSource;
