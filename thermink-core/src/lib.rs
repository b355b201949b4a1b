//! Board-agnostic station logic for the Thermink display
//!
//! This crate contains everything between the sensor and the panel that
//! does not depend on specific hardware:
//!
//! - Collaborator traits (sensor, frame sink)
//! - Dashboard layout: reading → strings, icon flags, draw calls
//! - Redraw policy and the alternating pixel offset
//! - The per-poll refresh cycle
//! - Station configuration

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod dashboard;
pub mod offset;
pub mod policy;
pub mod station;
pub mod traits;

// Re-export key types
pub use config::{DashboardLayout, OffsetConfig, Position, StationConfig};
pub use dashboard::{Dashboard, DashboardError, IconFlags};
pub use offset::OffsetToggle;
pub use policy::{RedrawMode, RedrawPolicy};
pub use station::{PollOutcome, Station, StationError};
pub use traits::{FrameSink, HygroSensor, Reading, SensorError};
