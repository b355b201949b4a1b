//! Station configuration
//!
//! Board-agnostic configuration stored as postcard binary data.

pub mod types;

pub use types::*;

#[cfg(feature = "serde")]
mod persist;

#[cfg(feature = "serde")]
pub use persist::{ConfigError, MAX_CONFIG_SIZE};
