//! Canvas to panel bit packing
//!
//! The panel consumes pages of 8 rows: one byte holds the same column of
//! 8 consecutive rows, the top row in the most significant bit.
//!
//! ```text
//! byte_index = x + (y / 8) * width
//! bit        = 7 - (y % 8)
//! ```
//!
//! Polarity is active-low: every byte starts as `0xFF` (white) and a set
//! pixel clears its bit.

use crate::canvas::{Canvas, PixelState, STATION_HEIGHT, STATION_WIDTH};

/// Packed frame length for the reference station panel
pub const STATION_FRAME_LEN: usize = packed_len(STATION_WIDTH, STATION_HEIGHT);

/// Byte value of an all-white page column
const BLANK: u8 = 0xFF;

/// Packed length for a `width × height` canvas
pub const fn packed_len(width: usize, height: usize) -> usize {
    width * height.div_ceil(8)
}

/// Narrow a canvas dimension to a descriptor field
///
/// Evaluated in a const context this turns an oversized canvas into a
/// compile error.
const fn descriptor_dim(n: usize) -> u16 {
    assert!(n <= u16::MAX as usize, "canvas dimension does not fit a frame descriptor");
    n as u16
}

/// Errors that can occur while packing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PackError {
    /// Output buffer shorter than the packed frame
    BufferTooSmall,
    /// Fixed frame length does not match the canvas geometry
    LengthMismatch,
}

/// Frame geometry handed to the display driver alongside the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameDescriptor {
    /// Frame width in pixels
    pub width: u16,
    /// Frame height in pixels
    pub height: u16,
    /// Pixels per packed row (the page stride)
    pub pitch: u16,
    /// Packed buffer size in bytes
    pub buf_size: usize,
}

/// A packed frame with a compile-time length
#[derive(Clone, PartialEq, Eq)]
pub struct PackedFrame<const LEN: usize> {
    bytes: [u8; LEN],
}

impl<const LEN: usize> PackedFrame<LEN> {
    /// Packed bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Frame length in bytes
    pub const fn len(&self) -> usize {
        LEN
    }

    /// Check whether the frame holds no bytes
    pub const fn is_empty(&self) -> bool {
        LEN == 0
    }
}

impl<const LEN: usize> AsRef<[u8]> for PackedFrame<LEN> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<const LEN: usize> core::fmt::Debug for PackedFrame<LEN> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PackedFrame").field("len", &LEN).finish()
    }
}

impl<const WIDTH: usize, const HEIGHT: usize> Canvas<WIDTH, HEIGHT> {
    /// `(width, height)` as carried by [`FrameDescriptor`]
    const DESCRIPTOR_DIMS: (u16, u16) = (descriptor_dim(WIDTH), descriptor_dim(HEIGHT));

    /// Length of this canvas's packed frame in bytes
    pub const fn packed_len(&self) -> usize {
        packed_len(WIDTH, HEIGHT)
    }

    /// Descriptor matching [`Canvas::pack`] output
    pub const fn descriptor(&self) -> FrameDescriptor {
        let (width, height) = Self::DESCRIPTOR_DIMS;
        FrameDescriptor {
            width,
            height,
            pitch: width,
            buf_size: packed_len(WIDTH, HEIGHT),
        }
    }

    /// Pack the canvas into `out`
    ///
    /// The first [`Canvas::packed_len`] bytes of `out` are fully
    /// overwritten; bytes past that are left alone. Returns the number of
    /// bytes written.
    pub fn pack_into(&self, out: &mut [u8]) -> Result<usize, PackError> {
        let len = self.packed_len();
        let frame = out.get_mut(..len).ok_or(PackError::BufferTooSmall)?;

        frame.fill(BLANK);
        for (y, row) in self.rows().enumerate() {
            let page = (y / 8) * WIDTH;
            let mask = !(1u8 << (7 - (y % 8)));
            for (x, &cell) in row.iter().enumerate() {
                if cell == PixelState::Set {
                    frame[page + x] &= mask;
                }
            }
        }

        Ok(len)
    }

    /// Pack the canvas into an owned frame
    ///
    /// `LEN` must equal [`Canvas::packed_len`].
    pub fn pack<const LEN: usize>(&self) -> Result<PackedFrame<LEN>, PackError> {
        if LEN != self.packed_len() {
            return Err(PackError::LengthMismatch);
        }
        let mut bytes = [BLANK; LEN];
        self.pack_into(&mut bytes)?;
        Ok(PackedFrame { bytes })
    }
}
