//! Frame sink trait for the display driver

use thermink_raster::FrameDescriptor;

/// Display driver that accepts whole packed frames
///
/// The buffer is always a complete frame laid out as described by `desc`;
/// there is no partial update.
pub trait FrameSink {
    /// Error type for transmit failures
    type Error;

    /// Transmit one frame, blocking until the driver has taken it
    fn write_frame(&mut self, desc: &FrameDescriptor, buf: &[u8]) -> Result<(), Self::Error>;
}
