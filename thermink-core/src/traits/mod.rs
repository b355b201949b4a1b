//! Hardware abstraction traits
//!
//! These traits define the interface between the station logic and the
//! board-specific sensor and display drivers.

pub mod sensor;
pub mod sink;

pub use sensor::{HygroSensor, Reading, SensorError};
pub use sink::FrameSink;
