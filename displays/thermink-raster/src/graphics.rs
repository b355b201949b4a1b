//! embedded-graphics support
//!
//! Lets embedded-graphics primitives draw into a [`Canvas`]. `On` maps to
//! [`Canvas::set`] and `Off` to [`Canvas::unset`], so out-of-range pixels
//! clip the same way as the built-in primitives.

use core::convert::Infallible;

use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::geometry::{OriginDimensions, Size};
use embedded_graphics_core::pixelcolor::BinaryColor;
use embedded_graphics_core::Pixel;

use crate::canvas::Canvas;

impl<const W: usize, const H: usize> DrawTarget for Canvas<W, H> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            match color {
                BinaryColor::On => self.set(point.x, point.y),
                BinaryColor::Off => self.unset(point.x, point.y),
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        match color {
            BinaryColor::On => self.fill(),
            BinaryColor::Off => Canvas::clear(self),
        }
        Ok(())
    }
}

impl<const W: usize, const H: usize> OriginDimensions for Canvas<W, H> {
    fn size(&self) -> Size {
        Size::new(W as u32, H as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::prelude::*;
    use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};

    #[test]
    fn test_size() {
        let canvas = Canvas::<256, 120>::new();
        assert_eq!(canvas.size(), Size::new(256, 120));
    }

    #[test]
    fn test_line_primitive_sets_pixels() {
        let mut canvas = Canvas::<16, 16>::new();
        Line::new(Point::new(0, 0), Point::new(7, 0))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut canvas)
            .unwrap();
        assert_eq!(canvas.set_pixel_count(), 8);
        assert!(canvas.is_set(7, 0));
    }

    #[test]
    fn test_off_pixels_erase_and_clip() {
        let mut canvas = Canvas::<8, 8>::new();
        canvas.fill();
        Rectangle::new(Point::new(-2, -2), Size::new(4, 4))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::Off))
            .draw(&mut canvas)
            .unwrap();
        assert_eq!(canvas.set_pixel_count(), 64 - 4);
        assert!(!canvas.is_set(1, 1));
    }

    #[test]
    fn test_clear_with_color() {
        let mut canvas = Canvas::<8, 8>::new();
        DrawTarget::clear(&mut canvas, BinaryColor::On).unwrap();
        assert_eq!(canvas.set_pixel_count(), 64);
        DrawTarget::clear(&mut canvas, BinaryColor::Off).unwrap();
        assert_eq!(canvas.set_pixel_count(), 0);
    }
}
