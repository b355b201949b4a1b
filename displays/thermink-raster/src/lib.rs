//! Monochrome raster engine for the Thermink display
//!
//! This crate provides:
//! - [`Canvas`], a logical one-state-per-pixel drawing surface
//! - The packer that turns a canvas into the panel's 1-bit page format
//! - Fixed-size bitmap fonts and the glyph rasterizer
//! - Packed icon bitmaps and the blitter
//! - Procedural shapes (sun, raindrop)
//!
//! # Frame flow
//!
//! ```text
//! clear() ──► draw_string / draw_image / draw_sun ... ──► pack() ──► frame sink
//! ```
//!
//! Every primitive funnels its writes through [`Canvas::set`], so pixels
//! that land outside the canvas are clipped the same way no matter which
//! primitive produced them.

#![no_std]
#![deny(unsafe_code)]

pub mod canvas;
pub mod font;
#[cfg(feature = "graphics")]
pub mod graphics;
pub mod icons;
pub mod image;
pub mod pack;
pub mod shapes;
pub mod text;

// Re-export key types
pub use canvas::{Canvas, PixelState, StationCanvas, STATION_HEIGHT, STATION_WIDTH};
pub use font::{BitmapFont, FontError, Glyph, FONT_12X16, FONT_6X8, FONT_8X10};
pub use image::{draw_image, Icon, IconError};
pub use pack::{FrameDescriptor, PackError, PackedFrame, STATION_FRAME_LEN};
pub use shapes::{draw_raindrop, draw_sun, RAINDROP_HEIGHT, RAINDROP_WIDTH};
pub use text::{draw_char, draw_string, text_width};
