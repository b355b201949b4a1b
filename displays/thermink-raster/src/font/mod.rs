//! Fixed-size bitmap fonts
//!
//! A font is a contiguous table of equally sized glyphs covering one
//! character range. Each glyph is stored row-major, MSB first, with
//! `ceil(width / 8)` bytes per row.

mod data;

/// Compact font: 5x7 design in a 6x8 cell (printable ASCII)
pub const FONT_6X8: BitmapFont = BitmapFont::from_static(6, 8, ' ', '~', &data::FONT_6X8_DATA);

/// Caption font: 7x9 design in an 8x10 cell (printable ASCII)
pub const FONT_8X10: BitmapFont = BitmapFont::from_static(8, 10, ' ', '~', &data::FONT_8X10_DATA);

/// Large font: the compact design doubled into a 12x16 cell (printable ASCII)
pub const FONT_12X16: BitmapFont =
    BitmapFont::from_static(12, 16, ' ', '~', &data::FONT_12X16_DATA);

/// Font table validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontError {
    /// Zero width or height
    EmptyCell,
    /// Last character precedes the first
    EmptyRange,
    /// Table size does not match glyph count × glyph size
    DataLength,
}

/// Immutable bitmap font table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapFont {
    width: u8,
    height: u8,
    first: u32,
    last: u32,
    data: &'static [u8],
}

impl BitmapFont {
    /// Build a font, rejecting inconsistent tables
    pub const fn new(
        width: u8,
        height: u8,
        first: char,
        last: char,
        data: &'static [u8],
    ) -> Result<Self, FontError> {
        if width == 0 || height == 0 {
            return Err(FontError::EmptyCell);
        }
        let (first, last) = (first as u32, last as u32);
        if last < first {
            return Err(FontError::EmptyRange);
        }
        let glyph_len = (width as usize).div_ceil(8) * height as usize;
        let count = (last - first + 1) as usize;
        if data.len() != count * glyph_len {
            return Err(FontError::DataLength);
        }
        Ok(Self {
            width,
            height,
            first,
            last,
            data,
        })
    }

    /// Build a font from a static table, failing compilation when invalid
    pub const fn from_static(
        width: u8,
        height: u8,
        first: char,
        last: char,
        data: &'static [u8],
    ) -> Self {
        match Self::new(width, height, first, last, data) {
            Ok(font) => font,
            Err(_) => panic!("inconsistent font table"),
        }
    }

    /// Glyph cell width, also the cursor advance
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Glyph cell height
    pub const fn height(&self) -> u8 {
        self.height
    }

    /// Bytes per glyph row
    pub const fn pitch(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }

    /// Check whether `c` has a glyph in this font
    pub fn contains(&self, c: char) -> bool {
        (self.first..=self.last).contains(&(c as u32))
    }

    /// Look up the glyph for `c`
    ///
    /// Characters outside the table return `None` and render blank.
    pub fn glyph(&self, c: char) -> Option<Glyph<'static>> {
        if !self.contains(c) {
            return None;
        }
        let glyph_len = self.pitch() * self.height as usize;
        let start = (c as u32 - self.first) as usize * glyph_len;
        let rows = self.data.get(start..start + glyph_len)?;
        Some(Glyph {
            width: self.width,
            height: self.height,
            pitch: self.pitch(),
            rows,
        })
    }
}

/// One character's bitmap, borrowed from its font table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph<'a> {
    width: u8,
    height: u8,
    pitch: usize,
    rows: &'a [u8],
}

impl<'a> Glyph<'a> {
    /// Glyph width in pixels
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Glyph height in pixels
    pub const fn height(&self) -> u8 {
        self.height
    }

    /// Check the pixel at glyph-local `(col, row)`
    pub fn is_set(&self, col: u8, row: u8) -> bool {
        if col >= self.width || row >= self.height {
            return false;
        }
        let byte = self.rows[row as usize * self.pitch + col as usize / 8];
        byte & (0x80 >> (col % 8)) != 0
    }

    /// Iterate the glyph-local coordinates of every set pixel
    pub fn pixels(&self) -> impl Iterator<Item = (u8, u8)> + 'a {
        let glyph = *self;
        (0..glyph.height).flat_map(move |row| {
            (0..glyph.width)
                .filter(move |&col| glyph.is_set(col, row))
                .map(move |col| (col, row))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_fonts_cover_printable_ascii() {
        for code in 0x20u8..=0x7E {
            let c = code as char;
            assert!(FONT_6X8.glyph(c).is_some());
            assert!(FONT_8X10.glyph(c).is_some());
            assert!(FONT_12X16.glyph(c).is_some());
        }
    }

    #[test]
    fn test_unsupported_char_has_no_glyph() {
        assert!(FONT_6X8.glyph('\n').is_none());
        assert!(FONT_6X8.glyph('\u{7F}').is_none());
        assert!(FONT_8X10.glyph('\t').is_none());
        assert!(FONT_12X16.glyph('°').is_none());
    }

    #[test]
    fn test_space_is_blank() {
        let glyph = FONT_6X8.glyph(' ').unwrap();
        assert_eq!(glyph.pixels().count(), 0);
    }

    #[test]
    fn test_compact_glyph_shape() {
        // 'T': full top bar, then a centre stem
        let glyph = FONT_6X8.glyph('T').unwrap();
        for col in 0..5 {
            assert!(glyph.is_set(col, 0));
        }
        for row in 1..7 {
            assert!(glyph.is_set(2, row));
            assert!(!glyph.is_set(0, row));
        }
        // Spacing column and baseline row stay blank
        for row in 0..8 {
            assert!(!glyph.is_set(5, row));
        }
        assert!((0..6).all(|col| !glyph.is_set(col, 7)));
    }

    #[test]
    fn test_caption_glyph_shape() {
        // 'T': seven-pixel top bar, single centre stem
        let glyph = FONT_8X10.glyph('T').unwrap();
        assert_eq!((glyph.width(), glyph.height()), (8, 10));
        for col in 0..7 {
            assert!(glyph.is_set(col, 0));
        }
        for row in 1..9 {
            assert!(glyph.is_set(3, row));
            assert!(!glyph.is_set(2, row));
            assert!(!glyph.is_set(4, row));
        }
        // Spacing column and baseline row stay blank
        assert!((0..10).all(|row| !glyph.is_set(7, row)));
        assert!((0..8).all(|col| !glyph.is_set(col, 9)));
    }

    #[test]
    fn test_caption_font_is_widened_compact() {
        const COLS: [u8; 7] = [0, 1, 1, 2, 3, 3, 4];
        const ROWS: [u8; 9] = [0, 1, 1, 2, 3, 4, 5, 5, 6];
        for code in 0x20u8..=0x7E {
            let c = code as char;
            let small = FONT_6X8.glyph(c).unwrap();
            let caption = FONT_8X10.glyph(c).unwrap();
            for (row, &src_row) in ROWS.iter().enumerate() {
                for (col, &src_col) in COLS.iter().enumerate() {
                    assert_eq!(
                        caption.is_set(col as u8, row as u8),
                        small.is_set(src_col, src_row),
                        "{c:?} at ({col}, {row})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_large_font_is_doubled_compact() {
        for c in ['0', 'A', 'g', '%'] {
            let small = FONT_6X8.glyph(c).unwrap();
            let large = FONT_12X16.glyph(c).unwrap();
            for row in 0..16 {
                for col in 0..12 {
                    assert_eq!(large.is_set(col, row), small.is_set(col / 2, row / 2));
                }
            }
        }
    }

    #[test]
    fn test_font_validation() {
        static DATA: [u8; 20] = [0x80; 20];
        assert!(BitmapFont::new(8, 10, 'A', 'B', &DATA).is_ok());
        assert_eq!(
            BitmapFont::new(8, 10, 'A', 'C', &DATA),
            Err(FontError::DataLength)
        );
        assert_eq!(
            BitmapFont::new(8, 10, 'B', 'A', &DATA),
            Err(FontError::EmptyRange)
        );
        assert_eq!(
            BitmapFont::new(0, 10, 'A', 'B', &DATA),
            Err(FontError::EmptyCell)
        );
    }

    #[test]
    fn test_glyph_out_of_cell_reads_clear() {
        let glyph = FONT_6X8.glyph('#').unwrap();
        assert!(!glyph.is_set(6, 0));
        assert!(!glyph.is_set(0, 8));
    }
}
