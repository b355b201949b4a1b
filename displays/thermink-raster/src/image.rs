//! Packed icon bitmaps and the blitter
//!
//! Icons are 1-bit, row-major, MSB first. `pitch` is the stored bytes per
//! row and may exceed `ceil(width / 8)`; bits past `width` are padding.

use crate::canvas::Canvas;

/// Icon metadata validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IconError {
    /// `pitch` is smaller than `ceil(width / 8)`
    PitchTooSmall,
    /// Fewer than `pitch * height` data bytes
    DataTooShort,
}

/// Immutable packed bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    width: u16,
    height: u16,
    pitch: u16,
    data: &'static [u8],
}

impl Icon {
    /// Build an icon, rejecting metadata that would read out of bounds
    pub const fn new(
        width: u16,
        height: u16,
        pitch: u16,
        data: &'static [u8],
    ) -> Result<Self, IconError> {
        if (pitch as usize) < (width as usize).div_ceil(8) {
            return Err(IconError::PitchTooSmall);
        }
        if data.len() < pitch as usize * height as usize {
            return Err(IconError::DataTooShort);
        }
        Ok(Self {
            width,
            height,
            pitch,
            data,
        })
    }

    /// Build an icon from a static table, failing compilation when invalid
    pub const fn from_static(width: u16, height: u16, pitch: u16, data: &'static [u8]) -> Self {
        match Self::new(width, height, pitch, data) {
            Ok(icon) => icon,
            Err(IconError::PitchTooSmall) => panic!("icon pitch smaller than its width"),
            Err(IconError::DataTooShort) => panic!("icon data shorter than pitch * height"),
        }
    }

    /// Width in pixels
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Stored bytes per row
    pub const fn pitch(&self) -> u16 {
        self.pitch
    }

    fn row(&self, y: usize) -> &[u8] {
        let pitch = self.pitch as usize;
        &self.data[y * pitch..(y + 1) * pitch]
    }
}

/// Blit `icon` with its top-left corner at `(x_offset, y_offset)`
///
/// One bits set pixels, zero bits are transparent. Drawing is additive:
/// nothing already on the canvas is erased.
pub fn draw_image<const W: usize, const H: usize>(
    canvas: &mut Canvas<W, H>,
    x_offset: i32,
    y_offset: i32,
    icon: &Icon,
) {
    let width = icon.width as usize;
    for y in 0..icon.height as usize {
        for (byte_index, &byte) in icon.row(y).iter().enumerate() {
            for bit in 0..8 {
                let x = byte_index * 8 + bit;
                if x >= width {
                    break;
                }
                if byte & (0x80 >> bit) != 0 {
                    canvas.set(
                        x_offset.saturating_add(x as i32),
                        y_offset.saturating_add(y as i32),
                    );
                }
            }
        }
    }
}
