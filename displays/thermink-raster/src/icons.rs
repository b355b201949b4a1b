//! Built-in icon table
//!
//! Icons are compiled in and looked up by name. Metadata is validated at
//! compile time through [`Icon::from_static`].

use crate::image::Icon;

/// Thermometer bulb, 10x24, two bytes per row (6 padding bits)
pub const THERMOMETER: Icon = Icon::from_static(10, 24, 2, &THERMOMETER_DATA);

/// Degree ring, 5x5
pub const DEGREE: Icon = Icon::from_static(5, 5, 1, &DEGREE_DATA);

/// Name → icon table
static ICONS: &[(&str, &Icon)] = &[("thermometer", &THERMOMETER), ("degree", &DEGREE)];

/// Look up a built-in icon by name
pub fn lookup(name: &str) -> Option<&'static Icon> {
    ICONS
        .iter()
        .find(|(icon_name, _)| *icon_name == name)
        .map(|(_, icon)| *icon)
}

#[rustfmt::skip]
const THERMOMETER_DATA: [u8; 48] = [
    0b0001_1110, 0b0000_0000,
    0b0010_0001, 0b0000_0000,
    0b0010_0001, 0b0000_0000,
    0b0010_0001, 0b0000_0000,
    0b0010_0001, 0b0000_0000,
    0b0010_0001, 0b0000_0000,
    0b0010_1101, 0b0000_0000,
    0b0010_1101, 0b0000_0000,
    0b0010_1101, 0b0000_0000,
    0b0010_1101, 0b0000_0000,
    0b0010_1101, 0b0000_0000,
    0b0010_1101, 0b0000_0000,
    0b0010_1101, 0b0000_0000,
    0b0010_1101, 0b0000_0000,
    0b0010_1101, 0b0000_0000,
    0b0010_1101, 0b0000_0000,
    0b0100_1100, 0b1000_0000,
    0b1001_1110, 0b0100_0000,
    0b1011_1111, 0b0100_0000,
    0b1011_1111, 0b0100_0000,
    0b1011_1111, 0b0100_0000,
    0b1001_1110, 0b0100_0000,
    0b0100_0000, 0b1000_0000,
    0b0011_1111, 0b0000_0000,
];

#[rustfmt::skip]
const DEGREE_DATA: [u8; 5] = [
    0b0111_0000,
    0b1000_1000,
    0b1000_1000,
    0b1000_1000,
    0b0111_0000,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use crate::image::draw_image;

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(lookup("thermometer"), Some(&THERMOMETER));
        assert_eq!(lookup("degree"), Some(&DEGREE));
        assert_eq!(lookup("mario"), None);
        assert!(ICONS
            .iter()
            .all(|(name, icon)| lookup(name) == Some(*icon)));
    }

    #[test]
    fn test_thermometer_pixels() {
        let mut canvas = Canvas::<16, 32>::new();
        draw_image(&mut canvas, 0, 0, &THERMOMETER);
        assert_eq!(canvas.set_pixel_count(), 102);

        // Symmetric around its vertical axis
        for y in 0..24 {
            for x in 0..10 {
                assert_eq!(canvas.is_set(x, y), canvas.is_set(9 - x, y));
            }
        }
        // Nothing drawn in the padding columns
        assert!((0..32).all(|y| (10..16).all(|x| !canvas.is_set(x, y))));
    }

    #[test]
    fn test_degree_pixels() {
        let mut canvas = Canvas::<8, 8>::new();
        draw_image(&mut canvas, 0, 0, &DEGREE);
        assert_eq!(canvas.set_pixel_count(), 12);
        assert!(!canvas.is_set(2, 2));
    }
}
