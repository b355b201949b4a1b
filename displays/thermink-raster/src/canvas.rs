//! Logical drawing surface
//!
//! One [`PixelState`] per pixel, stored row-major. The canvas is what every
//! drawing primitive writes into; the packer reads it once per frame.

/// Panel width of the reference station, in pixels
pub const STATION_WIDTH: usize = 256;

/// Panel height of the reference station, in pixels
pub const STATION_HEIGHT: usize = 120;

/// Canvas sized for the reference station panel
pub type StationCanvas = Canvas<STATION_WIDTH, STATION_HEIGHT>;

/// State of a single canvas pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PixelState {
    /// Background (shown white)
    #[default]
    Clear,
    /// Drawn (shown black)
    Set,
}

/// Fixed-size monochrome canvas
///
/// Coordinates are signed so that callers can lay out content partially
/// off-screen; anything outside `[0, WIDTH) × [0, HEIGHT)` is discarded.
#[derive(Clone, PartialEq, Eq)]
pub struct Canvas<const WIDTH: usize, const HEIGHT: usize> {
    cells: [[PixelState; WIDTH]; HEIGHT],
}

impl<const WIDTH: usize, const HEIGHT: usize> Default for Canvas<WIDTH, HEIGHT> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const WIDTH: usize, const HEIGHT: usize> Canvas<WIDTH, HEIGHT> {
    /// Create a canvas with every pixel clear
    pub const fn new() -> Self {
        Self {
            cells: [[PixelState::Clear; WIDTH]; HEIGHT],
        }
    }

    /// Canvas width in pixels
    pub const fn width(&self) -> usize {
        WIDTH
    }

    /// Canvas height in pixels
    pub const fn height(&self) -> usize {
        HEIGHT
    }

    /// Clear every pixel
    ///
    /// Call once per frame before drawing.
    pub fn clear(&mut self) {
        for row in self.cells.iter_mut() {
            row.fill(PixelState::Clear);
        }
    }

    /// Set every pixel
    pub fn fill(&mut self) {
        for row in self.cells.iter_mut() {
            row.fill(PixelState::Set);
        }
    }

    /// Set the pixel at `(x, y)`; no-op when out of bounds
    #[inline]
    pub fn set(&mut self, x: i32, y: i32) {
        self.write(x, y, PixelState::Set);
    }

    /// Clear the pixel at `(x, y)`; no-op when out of bounds
    #[inline]
    pub fn unset(&mut self, x: i32, y: i32) {
        self.write(x, y, PixelState::Clear);
    }

    /// Read the pixel at `(x, y)`, `None` when out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<PixelState> {
        let (col, row) = Self::index(x, y)?;
        Some(self.cells[row][col])
    }

    /// Check whether the pixel at `(x, y)` is set
    ///
    /// Out-of-bounds pixels read as clear.
    pub fn is_set(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == Some(PixelState::Set)
    }

    /// Number of set pixels
    pub fn set_pixel_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == PixelState::Set)
            .count()
    }

    /// Iterate rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[PixelState; WIDTH]> {
        self.cells.iter()
    }

    fn write(&mut self, x: i32, y: i32, state: PixelState) {
        if let Some((col, row)) = Self::index(x, y) {
            self.cells[row][col] = state;
        }
    }

    /// Bounds check, returning `(column, row)` indices
    fn index(x: i32, y: i32) -> Option<(usize, usize)> {
        if x < 0 || y < 0 {
            return None;
        }
        let (col, row) = (x as usize, y as usize);
        if col >= WIDTH || row >= HEIGHT {
            return None;
        }
        Some((col, row))
    }
}

impl<const WIDTH: usize, const HEIGHT: usize> core::fmt::Debug for Canvas<WIDTH, HEIGHT> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &WIDTH)
            .field("height", &HEIGHT)
            .field("set_pixels", &self.set_pixel_count())
            .finish()
    }
}

#[cfg(feature = "defmt")]
impl<const WIDTH: usize, const HEIGHT: usize> defmt::Format for Canvas<WIDTH, HEIGHT> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Canvas[{}x{}, {} set]",
            WIDTH,
            HEIGHT,
            self.set_pixel_count()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas_is_clear() {
        let canvas = Canvas::<16, 8>::new();
        assert_eq!(canvas.set_pixel_count(), 0);
        assert_eq!(canvas.width(), 16);
        assert_eq!(canvas.height(), 8);
    }

    #[test]
    fn test_set_and_unset() {
        let mut canvas = Canvas::<16, 8>::new();
        canvas.set(3, 4);
        assert!(canvas.is_set(3, 4));
        assert_eq!(canvas.set_pixel_count(), 1);

        canvas.unset(3, 4);
        assert!(!canvas.is_set(3, 4));
        assert_eq!(canvas.set_pixel_count(), 0);
    }

    #[test]
    fn test_out_of_bounds_is_clipped() {
        let mut canvas = Canvas::<16, 8>::new();
        canvas.set(-1, 0);
        canvas.set(0, -1);
        canvas.set(16, 0);
        canvas.set(0, 8);
        canvas.set(i32::MIN, i32::MAX);
        assert_eq!(canvas.set_pixel_count(), 0);
        assert_eq!(canvas.get(16, 0), None);

        // Writing the last column must not wrap into the next row
        canvas.set(15, 0);
        canvas.set(16, 0);
        assert!(canvas.is_set(15, 0));
        assert!(!canvas.is_set(0, 1));
    }

    #[test]
    fn test_unset_out_of_bounds_keeps_canvas() {
        let mut canvas = Canvas::<4, 4>::new();
        canvas.fill();
        canvas.unset(4, 0);
        canvas.unset(-3, 2);
        assert_eq!(canvas.set_pixel_count(), 16);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut canvas = Canvas::<8, 8>::new();
        canvas.fill();
        canvas.clear();
        let once = canvas.clone();
        canvas.clear();
        assert_eq!(canvas, once);
        assert_eq!(canvas.set_pixel_count(), 0);
    }
}
