//! Property tests for the raster engine

use proptest::prelude::*;
use thermink_raster::icons::{DEGREE, THERMOMETER};
use thermink_raster::shapes::sun_ring_points;
use thermink_raster::{
    draw_image, draw_raindrop, draw_string, draw_sun, BitmapFont, Canvas, StationCanvas, FONT_12X16,
    FONT_6X8, RAINDROP_HEIGHT, RAINDROP_WIDTH, STATION_FRAME_LEN,
};

type Small = Canvas<24, 20>;

fn outside() -> impl Strategy<Value = (i32, i32)> {
    prop_oneof![
        (i32::MIN..0, any::<i32>()),
        (24..i32::MAX, any::<i32>()),
        (any::<i32>(), i32::MIN..0),
        (any::<i32>(), 20..i32::MAX),
    ]
}

proptest! {
    #[test]
    fn out_of_bounds_set_and_unset_are_ignored(
        seed in proptest::collection::vec((0..24i32, 0..20i32), 0..40),
        (x, y) in outside(),
    ) {
        let mut canvas = Small::new();
        for (sx, sy) in seed {
            canvas.set(sx, sy);
        }
        let before = canvas.clone();

        canvas.set(x, y);
        prop_assert_eq!(&canvas, &before);
        canvas.unset(x, y);
        prop_assert_eq!(&canvas, &before);
    }

    #[test]
    fn blitting_twice_equals_once(x in -12..30i32, y in -25..25i32) {
        let mut once = Small::new();
        draw_image(&mut once, x, y, &THERMOMETER);
        draw_image(&mut once, x + 3, y, &DEGREE);

        let mut twice = once.clone();
        draw_image(&mut twice, x, y, &THERMOMETER);
        draw_image(&mut twice, x + 3, y, &DEGREE);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn empty_string_is_a_no_op(x in -100..100i32, y in -100..100i32) {
        let mut canvas = Small::new();
        canvas.set(4, 4);
        let before = canvas.clone();
        prop_assert_eq!(draw_string(&mut canvas, &FONT_6X8, "", x, y), x);
        prop_assert_eq!(draw_string(&mut canvas, &FONT_12X16, "", x, y), x);
        prop_assert_eq!(canvas, before);
    }

    #[test]
    fn text_never_escapes_the_canvas(
        text in "[ -~]{0,12}",
        x in -80..40i32,
        y in -20..30i32,
    ) {
        // Same text drawn on a larger canvas, then cropped, must match
        let mut small = Small::new();
        draw_string(&mut small, &FONT_6X8, &text, x, y);

        let mut large = Canvas::<224, 80>::new();
        draw_string(&mut large, &FONT_6X8, &text, x + 100, y + 30);

        for cy in 0..20 {
            for cx in 0..24 {
                prop_assert_eq!(small.is_set(cx, cy), large.is_set(cx + 100, cy + 30));
            }
        }
    }

    #[test]
    fn far_away_drawing_leaves_canvas_untouched(
        x in any::<i32>(),
        y in any::<i32>(),
        radius in 0..64i32,
    ) {
        let mut canvas = Small::new();
        draw_string(&mut canvas, &FONT_12X16, "WW", x, y);
        draw_image(&mut canvas, x, y, &THERMOMETER);
        draw_raindrop(&mut canvas, x, y);
        draw_sun(&mut canvas, x, y, radius);

        // Every primitive's footprint is well under 200 pixels across
        if x.unsigned_abs() > 200 || y.unsigned_abs() > 200 {
            prop_assert_eq!(canvas.set_pixel_count(), 0);
        }
    }

    #[test]
    fn sun_accepts_any_radius(
        cx in any::<i32>(),
        cy in any::<i32>(),
        radius in any::<i32>(),
    ) {
        let mut canvas = Small::new();
        draw_sun(&mut canvas, cx, cy, radius);
        prop_assert!(canvas.set_pixel_count() <= 24 * 20);
    }

    #[test]
    fn raindrop_is_mirror_symmetric(ox in -30..30i32, oy in -30..30i32) {
        let mut canvas = Canvas::<20, 27>::new();
        draw_raindrop(&mut canvas, 0, 0);
        let mut shifted = Canvas::<80, 80>::new();
        draw_raindrop(&mut shifted, ox + 30, oy + 30);

        for y in 0..RAINDROP_HEIGHT {
            for x in 0..RAINDROP_WIDTH {
                let mirror = RAINDROP_WIDTH - 1 - x;
                prop_assert_eq!(canvas.is_set(x, y), canvas.is_set(mirror, y));
                prop_assert_eq!(
                    shifted.is_set(ox + 30 + x, oy + 30 + y),
                    shifted.is_set(ox + 30 + mirror, oy + 30 + y)
                );
            }
        }
    }

    #[test]
    fn sun_ring_samples_within_one_pixel(
        cx in -50..300i32,
        cy in -50..200i32,
        radius in 1..60i32,
    ) {
        let samples: Vec<_> = sun_ring_points(cx, cy, radius).collect();
        prop_assert_eq!(samples.len(), 360);
        for (x, y) in samples {
            let (dx, dy) = ((x - cx) as f64, (y - cy) as f64);
            let distance = (dx * dx + dy * dy).sqrt().round() as i32;
            prop_assert!((distance - radius).abs() <= 1);
        }
    }
}

#[test]
fn drawing_at_the_coordinate_limits_clips() {
    let mut canvas = Small::new();
    for (x, y) in [(i32::MAX - 6, 0), (0, i32::MAX - 3), (i32::MIN, i32::MIN)] {
        assert_eq!(draw_string(&mut canvas, &FONT_6X8, "WW", x, y), x.saturating_add(12));
        draw_image(&mut canvas, x, y, &THERMOMETER);
        draw_raindrop(&mut canvas, x, y);
        draw_sun(&mut canvas, x, y, 5);
    }
    assert_eq!(draw_string(&mut canvas, &FONT_6X8, "WW", i32::MAX - 1, 0), i32::MAX);
    assert_eq!(canvas.set_pixel_count(), 0);
}

#[test]
fn clear_and_full_frames() {
    let mut canvas = StationCanvas::new();
    let frame = canvas.pack::<STATION_FRAME_LEN>().unwrap();
    assert!(frame.as_bytes().iter().all(|&b| b == 0xFF));

    canvas.fill();
    let frame = canvas.pack::<STATION_FRAME_LEN>().unwrap();
    assert!(frame.as_bytes().iter().all(|&b| b == 0x00));

    canvas.clear();
    let frame = canvas.pack::<STATION_FRAME_LEN>().unwrap();
    assert!(frame.as_bytes().iter().all(|&b| b == 0xFF));
}

/// 8x10 font where 'A' and 'B' both fill their cell's first column
static BAR_FONT_DATA: [u8; 20] = [0x80; 20];

#[test]
fn two_glyphs_pack_into_page_columns() {
    let font = BitmapFont::new(8, 10, 'A', 'B', &BAR_FONT_DATA).unwrap();
    let mut canvas = StationCanvas::new();

    let end = draw_string(&mut canvas, &font, "AB", 0, 0);
    assert_eq!(end, 16);

    let frame = canvas.pack::<STATION_FRAME_LEN>().unwrap();
    let bytes = frame.as_bytes();

    // Rows 0-7: whole byte cleared in columns 0 and 8
    assert_eq!(bytes[0], 0x00);
    assert_eq!(bytes[8], 0x00);
    // Rows 8-9 land in the top two bits of the next page
    assert_eq!(bytes[256], 0x3F);
    assert_eq!(bytes[256 + 8], 0x3F);

    for (i, &b) in bytes.iter().enumerate() {
        if ![0, 8, 256, 264].contains(&i) {
            assert_eq!(b, 0xFF, "byte {i} should be white");
        }
    }
}
