//! End-to-end station cycle against recording collaborators

use proptest::prelude::*;
use thermink_core::{
    FrameSink, HygroSensor, PollOutcome, Reading, RedrawMode, RedrawPolicy, SensorError, Station,
    StationConfig,
};
use thermink_raster::{FrameDescriptor, STATION_FRAME_LEN};

/// Replays a fixed script of readings
struct ScriptedSensor {
    script: Vec<Result<Reading, SensorError>>,
    next: usize,
}

impl ScriptedSensor {
    fn new(script: Vec<Result<Reading, SensorError>>) -> Self {
        Self { script, next: 0 }
    }
}

impl HygroSensor for ScriptedSensor {
    fn read(&mut self) -> Result<Reading, SensorError> {
        let reading = self.script[self.next % self.script.len()];
        self.next += 1;
        reading
    }
}

/// Keeps a copy of every transmitted frame
#[derive(Default)]
struct RecordingSink {
    frames: Vec<(FrameDescriptor, Vec<u8>)>,
}

impl FrameSink for RecordingSink {
    type Error = core::convert::Infallible;

    fn write_frame(&mut self, desc: &FrameDescriptor, buf: &[u8]) -> Result<(), Self::Error> {
        self.frames.push((*desc, buf.to_vec()));
        Ok(())
    }
}

#[test]
fn transmitted_frame_matches_canvas() {
    let sensor = ScriptedSensor::new(vec![Ok(Reading::new(273, 655))]);
    let mut station =
        Station::from_config(sensor, RecordingSink::default(), &StationConfig::default());

    station.poll().unwrap();

    let expected = station.canvas().pack::<STATION_FRAME_LEN>().unwrap();
    let (desc, bytes) = &station.sink().frames[0];
    assert_eq!(desc.buf_size, STATION_FRAME_LEN);
    assert_eq!(bytes.as_slice(), expected.as_bytes());
}

#[test]
fn polling_loop_script() {
    let sensor = ScriptedSensor::new(vec![
        Ok(Reading::new(210, 400)),
        Ok(Reading::new(214, 404)), // same whole units
        Err(SensorError::Timeout),  // sensor hiccup
        Ok(Reading::new(260, 404)), // warmer: sun appears
        Ok(Reading::new(260, 404)),
    ]);
    let mut station =
        Station::from_config(sensor, RecordingSink::default(), &StationConfig::default());

    let rendered: Vec<bool> = (0..5)
        .map(|_| matches!(station.poll(), Ok(PollOutcome::Rendered { .. })))
        .collect();
    assert_eq!(rendered, vec![true, false, false, true, false]);
    assert_eq!(station.sink().frames.len(), 2);

    // Every transmitted frame is complete
    for (desc, bytes) in &station.sink().frames {
        assert_eq!(bytes.len(), desc.buf_size);
    }
    assert_ne!(station.sink().frames[0].1, station.sink().frames[1].1);
}

#[test]
fn offset_toggle_shifts_alternate_frames() {
    let mut config = StationConfig::default();
    config.offset.enabled = true;
    config.redraw = RedrawMode::Always;

    let sensor = ScriptedSensor::new(vec![Ok(Reading::new(210, 400))]);
    let mut station = Station::from_config(sensor, RecordingSink::default(), &config);
    for _ in 0..3 {
        station.poll().unwrap();
    }

    let frames = &station.sink().frames;
    assert_ne!(frames[0].1, frames[1].1);
    assert_eq!(frames[0].1, frames[2].1);
}

proptest! {
    #[test]
    fn on_change_redraws_iff_displayed_values_differ(
        t0 in -400..800i16, h0 in 0..1000u16,
        t1 in -400..800i16, h1 in 0..1000u16,
    ) {
        let (a, b) = (Reading::new(t0, h0), Reading::new(t1, h1));
        let differs = a.temperature_c() != b.temperature_c() || a.humidity_pct() != b.humidity_pct();
        prop_assert_eq!(RedrawMode::OnChange.should_redraw(Some(&a), &b), differs);
        prop_assert!(RedrawMode::Always.should_redraw(Some(&a), &b));
    }
}
