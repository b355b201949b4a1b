//! Dashboard layout
//!
//! Turns a [`Reading`] into draw calls: formatted strings in the three
//! built-in fonts, the thermometer and degree bitmaps, and the procedural
//! sun/raindrop icons when their thresholds are crossed.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │ ▐  23°C                          \ | /   │
//! │ ▐                                 (O)    │
//! │                                  / | \   │
//! │ Temperature is: 23 Celsius               │
//! │ Humidity: 61 %                     /\    │
//! │                                   (  )   │
//! └──────────────────────────────────────────┘
//! ```

use core::fmt::Write;

use heapless::String;
use thermink_raster::icons::{DEGREE, THERMOMETER};
use thermink_raster::{draw_image, draw_raindrop, draw_string, draw_sun, Canvas};
use thermink_raster::{FONT_12X16, FONT_6X8, FONT_8X10};

use crate::config::{DashboardLayout, Position};
use crate::traits::Reading;

/// Longest line the dashboard formats
pub const LINE_LEN: usize = 32;

/// Gap between the large number and the degree ring
const DEGREE_GAP: i32 = 2;

/// Errors that can occur while laying out a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DashboardError {
    /// Formatted text did not fit its line buffer
    TextOverflow,
}

impl From<core::fmt::Error> for DashboardError {
    fn from(_: core::fmt::Error) -> Self {
        DashboardError::TextOverflow
    }
}

/// Which optional icons a frame shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IconFlags {
    /// Warm: sun icon
    pub sun: bool,
    /// Humid: raindrop icon
    pub raindrop: bool,
}

/// Dashboard renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dashboard {
    layout: DashboardLayout,
}

impl Dashboard {
    /// Create a dashboard with the given layout
    pub const fn new(layout: DashboardLayout) -> Self {
        Self { layout }
    }

    /// Current layout
    pub const fn layout(&self) -> &DashboardLayout {
        &self.layout
    }

    /// Decide which optional icons `reading` shows
    pub fn icon_flags(&self, reading: &Reading) -> IconFlags {
        IconFlags {
            sun: reading.temperature_c() >= self.layout.warm_threshold_c,
            raindrop: reading.humidity_pct() >= self.layout.humid_threshold_pct,
        }
    }

    /// Draw `reading` onto `canvas`, every element shifted by `(dx, dy)`
    ///
    /// The canvas is not cleared here; the caller owns the frame.
    pub fn render<const W: usize, const H: usize>(
        &self,
        canvas: &mut Canvas<W, H>,
        reading: &Reading,
        dx: i32,
        dy: i32,
    ) -> Result<IconFlags, DashboardError> {
        let at = |pos: Position| (pos.x as i32 + dx, pos.y as i32 + dy);
        let layout = &self.layout;

        let (x, y) = at(layout.thermometer);
        draw_image(canvas, x, y, &THERMOMETER);

        // Large readout: number, degree ring, unit
        let (x, y) = at(layout.temperature);
        let number = format_number(reading.temperature_c())?;
        let end = draw_string(canvas, &FONT_12X16, &number, x, y);
        draw_image(canvas, end + DEGREE_GAP, y, &DEGREE);
        draw_string(
            canvas,
            &FONT_12X16,
            "C",
            end + DEGREE_GAP * 2 + DEGREE.width() as i32,
            y,
        );

        let (x, y) = at(layout.caption);
        draw_string(canvas, &FONT_8X10, &temperature_caption(reading)?, x, y);

        let (x, y) = at(layout.humidity);
        draw_string(canvas, &FONT_6X8, &humidity_line(reading)?, x, y);

        let flags = self.icon_flags(reading);
        if flags.sun {
            let (cx, cy) = at(layout.sun);
            draw_sun(canvas, cx, cy, layout.sun_radius as i32);
        }
        if flags.raindrop {
            let (x, y) = at(layout.raindrop);
            draw_raindrop(canvas, x, y);
        }

        Ok(flags)
    }
}

fn format_number(value: i16) -> Result<String<LINE_LEN>, DashboardError> {
    let mut line = String::new();
    write!(line, "{}", value)?;
    Ok(line)
}

/// `"Temperature is: 23 Celsius"`
pub fn temperature_caption(reading: &Reading) -> Result<String<LINE_LEN>, DashboardError> {
    let mut line = String::new();
    write!(line, "Temperature is: {} Celsius", reading.temperature_c())?;
    Ok(line)
}

/// `"Humidity: 61 %"`
pub fn humidity_line(reading: &Reading) -> Result<String<LINE_LEN>, DashboardError> {
    let mut line = String::new();
    write!(line, "Humidity: {} %", reading.humidity_pct())?;
    Ok(line)
}
