//! Temperature/humidity sensor trait

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors reported by the sensor driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Sensor not yet ready after power-up
    NotReady,
    /// No response within the expected time
    Timeout,
    /// Data received but checksum did not match
    Checksum,
    /// Value outside the sensor's measurement range
    OutOfRange,
}

/// One temperature/humidity sample
///
/// Values are fixed-point tenths (e.g. `temperature_x10 = 235` is 23.5°C).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Reading {
    /// Temperature (°C × 10)
    pub temperature_x10: i16,
    /// Relative humidity (% × 10)
    pub humidity_x10: u16,
}

impl Reading {
    /// Create a reading from tenths
    pub const fn new(temperature_x10: i16, humidity_x10: u16) -> Self {
        Self {
            temperature_x10,
            humidity_x10,
        }
    }

    /// Whole degrees Celsius, truncated toward zero
    pub const fn temperature_c(&self) -> i16 {
        self.temperature_x10 / 10
    }

    /// Whole percent relative humidity, truncated
    pub const fn humidity_pct(&self) -> u16 {
        self.humidity_x10 / 10
    }
}

/// Trait for temperature/humidity sensors
pub trait HygroSensor {
    /// Take a fresh sample
    ///
    /// May block on the sensor's I/O.
    fn read(&mut self) -> Result<Reading, SensorError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_units_truncate() {
        let reading = Reading::new(239, 456);
        assert_eq!(reading.temperature_c(), 23);
        assert_eq!(reading.humidity_pct(), 45);

        // Below zero truncates toward zero, like the panel text
        assert_eq!(Reading::new(-35, 0).temperature_c(), -3);
    }
}
