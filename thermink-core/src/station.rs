//! Station refresh cycle
//!
//! One call to [`Station::poll`] runs a full cycle to completion:
//!
//! 1. read the sensor
//! 2. ask the redraw policy
//! 3. clear the canvas, lay out the dashboard, pack
//! 4. hand the whole frame to the sink
//!
//! Sleeping between polls is the caller's job; see
//! [`Station::poll_interval_ms`].

use thermink_raster::{PackError, StationCanvas, STATION_FRAME_LEN};

use crate::config::StationConfig;
use crate::dashboard::{Dashboard, DashboardError, IconFlags};
use crate::offset::OffsetToggle;
use crate::policy::{RedrawMode, RedrawPolicy};
use crate::traits::{FrameSink, HygroSensor, Reading, SensorError};

/// Errors from one refresh cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StationError<E> {
    /// Sensor read failed; nothing was drawn
    Sensor(SensorError),
    /// Dashboard layout failed
    Layout(DashboardError),
    /// Packing failed
    Pack(PackError),
    /// Frame sink rejected the frame
    Sink(E),
}

impl<E> From<SensorError> for StationError<E> {
    fn from(e: SensorError) -> Self {
        StationError::Sensor(e)
    }
}

impl<E> From<DashboardError> for StationError<E> {
    fn from(e: DashboardError) -> Self {
        StationError::Layout(e)
    }
}

impl<E> From<PackError> for StationError<E> {
    fn from(e: PackError) -> Self {
        StationError::Pack(e)
    }
}

/// What a poll did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollOutcome {
    /// Policy declined; the panel keeps its previous frame
    Skipped(Reading),
    /// A new frame was transmitted
    Rendered {
        reading: Reading,
        flags: IconFlags,
        /// Offset the frame was drawn at
        offset: (i32, i32),
    },
}

/// Sensor-to-panel pipeline for the reference 256x120 station
pub struct Station<S, F, P = RedrawMode> {
    sensor: S,
    sink: F,
    policy: P,
    dashboard: Dashboard,
    offset: OffsetToggle,
    poll_interval_ms: u32,
    canvas: StationCanvas,
    frame: [u8; STATION_FRAME_LEN],
    /// Last reading that reached the panel
    last_rendered: Option<Reading>,
}

impl<S, F> Station<S, F, RedrawMode>
where
    S: HygroSensor,
    F: FrameSink,
{
    /// Create a station using the configured built-in redraw mode
    pub fn from_config(sensor: S, sink: F, config: &StationConfig) -> Self {
        Self::with_policy(sensor, sink, config.redraw, config)
    }
}

impl<S, F, P> Station<S, F, P>
where
    S: HygroSensor,
    F: FrameSink,
    P: RedrawPolicy,
{
    /// Create a station with a caller-supplied redraw policy
    pub fn with_policy(sensor: S, sink: F, policy: P, config: &StationConfig) -> Self {
        Self {
            sensor,
            sink,
            policy,
            dashboard: Dashboard::new(config.layout),
            offset: OffsetToggle::new(config.offset),
            poll_interval_ms: config.poll_interval_ms,
            canvas: StationCanvas::new(),
            frame: [0xFF; STATION_FRAME_LEN],
            last_rendered: None,
        }
    }

    /// Run one refresh cycle
    pub fn poll(&mut self) -> Result<PollOutcome, StationError<F::Error>> {
        let reading = self.sensor.read().inspect_err(|_e| {
            #[cfg(feature = "defmt")]
            defmt::warn!("Sensor read failed: {:?}", _e);
        })?;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "Reading: {} C x10, {} % x10",
            reading.temperature_x10,
            reading.humidity_x10
        );

        if !self
            .policy
            .should_redraw(self.last_rendered.as_ref(), &reading)
        {
            #[cfg(feature = "defmt")]
            defmt::trace!("Reading unchanged, skipping redraw");
            return Ok(PollOutcome::Skipped(reading));
        }

        let offset = self.offset.current();
        let flags = self.render(&reading, offset)?;
        self.transmit()?;

        self.last_rendered = Some(reading);
        self.offset.advance();

        #[cfg(feature = "defmt")]
        defmt::info!(
            "Frame sent: {} C, {} %, sun={}, rain={}",
            reading.temperature_c(),
            reading.humidity_pct(),
            flags.sun,
            flags.raindrop
        );

        Ok(PollOutcome::Rendered {
            reading,
            flags,
            offset,
        })
    }

    /// Clear the canvas and draw `reading` at `offset`
    fn render(
        &mut self,
        reading: &Reading,
        (dx, dy): (i32, i32),
    ) -> Result<IconFlags, StationError<F::Error>> {
        self.canvas.clear();
        Ok(self.dashboard.render(&mut self.canvas, reading, dx, dy)?)
    }

    /// Pack the canvas and hand the whole frame to the sink
    fn transmit(&mut self) -> Result<(), StationError<F::Error>> {
        let len = self.canvas.pack_into(&mut self.frame)?;
        let desc = self.canvas.descriptor();
        self.sink
            .write_frame(&desc, &self.frame[..len])
            .map_err(|e| {
                #[cfg(feature = "defmt")]
                defmt::warn!("Frame transmit failed");
                StationError::Sink(e)
            })
    }

    /// Forget the last rendered reading so the next poll always redraws
    pub fn invalidate(&mut self) {
        self.last_rendered = None;
        self.offset.reset();
    }

    /// Configured time between polls (ms)
    pub const fn poll_interval_ms(&self) -> u32 {
        self.poll_interval_ms
    }

    /// Last reading that reached the panel
    pub fn last_rendered(&self) -> Option<&Reading> {
        self.last_rendered.as_ref()
    }

    /// Canvas as of the last render
    pub fn canvas(&self) -> &StationCanvas {
        &self.canvas
    }

    /// Frame sink
    pub fn sink(&self) -> &F {
        &self.sink
    }

    /// Mutable access to the sensor
    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }

    /// Release the collaborators
    pub fn into_parts(self) -> (S, F, P) {
        (self.sensor, self.sink, self.policy)
    }
}
