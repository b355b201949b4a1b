//! Glyph rasterizer
//!
//! Single-line text in a fixed-cell font. The cursor advances by the font's
//! cell width per character, supported or not; there is no kerning, no
//! wrapping and no newline handling.

use crate::canvas::Canvas;
use crate::font::BitmapFont;

/// Draw one character with its top-left corner at `(x, y)`
///
/// Characters without a glyph draw nothing.
pub fn draw_char<const W: usize, const H: usize>(
    canvas: &mut Canvas<W, H>,
    font: &BitmapFont,
    c: char,
    x: i32,
    y: i32,
) {
    let Some(glyph) = font.glyph(c) else {
        return;
    };
    for (col, row) in glyph.pixels() {
        canvas.set(x.saturating_add(col as i32), y.saturating_add(row as i32));
    }
}

/// Draw `text` left to right starting at `(x, y)`
///
/// Returns the cursor x after the last character.
pub fn draw_string<const W: usize, const H: usize>(
    canvas: &mut Canvas<W, H>,
    font: &BitmapFont,
    text: &str,
    x: i32,
    y: i32,
) -> i32 {
    let advance = font.width() as i32;
    let mut cursor = x;
    for c in text.chars() {
        draw_char(canvas, font, c, cursor, y);
        cursor = cursor.saturating_add(advance);
    }
    cursor
}

/// Horizontal advance of `text` in `font`
pub fn text_width(font: &BitmapFont, text: &str) -> i32 {
    (text.chars().count() as i32).saturating_mul(font.width() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{FONT_12X16, FONT_6X8};

    #[test]
    fn test_draw_char_matches_glyph() {
        let mut canvas = Canvas::<16, 16>::new();
        draw_char(&mut canvas, &FONT_6X8, 'L', 2, 3);

        let glyph = FONT_6X8.glyph('L').unwrap();
        assert_eq!(canvas.set_pixel_count(), glyph.pixels().count());
        // 'L' stem on the left, bar on row 6
        for row in 0..7 {
            assert!(canvas.is_set(2, 3 + row));
        }
        for col in 0..5 {
            assert!(canvas.is_set(2 + col, 9));
        }
    }

    #[test]
    fn test_unsupported_char_is_blank() {
        let mut canvas = Canvas::<16, 16>::new();
        draw_char(&mut canvas, &FONT_6X8, '\u{263A}', 0, 0);
        assert_eq!(canvas.set_pixel_count(), 0);
    }

    #[test]
    fn test_draw_string_advances_by_cell_width() {
        let mut canvas = Canvas::<64, 16>::new();
        let end = draw_string(&mut canvas, &FONT_6X8, "II", 1, 0);
        assert_eq!(end, 13);

        // 'I' stem sits in the cell's centre column
        assert!(canvas.is_set(1 + 2, 3));
        assert!(canvas.is_set(7 + 2, 3));
    }

    #[test]
    fn test_unsupported_char_still_advances() {
        let mut canvas = Canvas::<64, 16>::new();
        let end = draw_string(&mut canvas, &FONT_6X8, "I\tI", 0, 0);
        assert_eq!(end, 18);
        assert!(canvas.is_set(2, 3));
        assert!(!canvas.is_set(8, 3));
        assert!(canvas.is_set(14, 3));
    }

    #[test]
    fn test_empty_string() {
        let mut canvas = Canvas::<16, 16>::new();
        assert_eq!(draw_string(&mut canvas, &FONT_12X16, "", 5, 5), 5);
        assert_eq!(canvas.set_pixel_count(), 0);
    }

    #[test]
    fn test_string_clips_at_edges() {
        let mut canvas = Canvas::<16, 8>::new();
        let end = draw_string(&mut canvas, &FONT_6X8, "WWWW", -3, 2);
        assert_eq!(end, 21);
        // Nothing wrapped onto the first rows
        assert!((0..16).all(|x| !canvas.is_set(x, 0) && !canvas.is_set(x, 1)));
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width(&FONT_6X8, "abc"), 18);
        assert_eq!(text_width(&FONT_12X16, "12.5"), 48);
        assert_eq!(text_width(&FONT_6X8, ""), 0);
    }
}
