//! Configuration type definitions
//!
//! Defaults describe the reference station: a 256x120 panel polled every
//! three seconds, redrawn only when a displayed value changes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::policy::RedrawMode;

/// Current configuration layout version
pub const CONFIG_VERSION: u8 = 1;

/// Pixel position on the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    /// Column, pixels from the left edge
    pub x: i16,
    /// Row, pixels from the top edge
    pub y: i16,
}

impl Position {
    /// Create a position at `(x, y)`
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }
}

/// Alternating offset configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OffsetConfig {
    /// Shift every other frame
    pub enabled: bool,
    /// Horizontal shift in pixels
    pub dx: i8,
    /// Vertical shift in pixels
    pub dy: i8,
}

impl Default for OffsetConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            dx: 1,
            dy: 0,
        }
    }
}

/// Where things go on the panel and when icons show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DashboardLayout {
    /// Thermometer icon, top-left corner
    pub thermometer: Position,
    /// Large temperature readout, top-left corner
    pub temperature: Position,
    /// Temperature sentence, caption font
    pub caption: Position,
    /// Compact humidity line
    pub humidity: Position,
    /// Sun centre
    pub sun: Position,
    /// Sun ring radius
    pub sun_radius: u8,
    /// Raindrop footprint, top-left corner
    pub raindrop: Position,
    /// Show the sun at or above this temperature (°C)
    pub warm_threshold_c: i16,
    /// Show the raindrop at or above this humidity (%)
    pub humid_threshold_pct: u16,
}

impl Default for DashboardLayout {
    fn default() -> Self {
        Self {
            thermometer: Position::new(8, 8),
            temperature: Position::new(28, 12),
            caption: Position::new(10, 50),
            humidity: Position::new(10, 66),
            sun: Position::new(220, 30),
            sun_radius: 10,
            raindrop: Position::new(210, 64),
            warm_threshold_c: 25,
            humid_threshold_pct: 60,
        }
    }
}

/// Complete station configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StationConfig {
    /// Layout version, checked on load
    pub version: u8,
    /// Time between sensor polls (ms)
    pub poll_interval_ms: u32,
    /// Redraw gating
    pub redraw: RedrawMode,
    /// Anti-ghosting offset
    pub offset: OffsetConfig,
    /// Dashboard layout
    pub layout: DashboardLayout,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            poll_interval_ms: 3000,
            redraw: RedrawMode::OnChange,
            offset: OffsetConfig::default(),
            layout: DashboardLayout::default(),
        }
    }
}
