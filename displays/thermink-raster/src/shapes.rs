//! Procedural icons
//!
//! Shapes are stateless and built only from [`Canvas::set`] calls, so they
//! clip exactly like text and bitmaps.

use crate::canvas::Canvas;

/// Number of sun rays
pub const SUN_RAYS: u16 = 12;

/// Ray length past the ring, in pixels
pub const SUN_RAY_LENGTH: i32 = 4;

/// Raindrop footprint width
pub const RAINDROP_WIDTH: i32 = 20;

/// Raindrop footprint height
pub const RAINDROP_HEIGHT: i32 = 27;

/// Rows taken by the raindrop's triangular tip
const RAINDROP_TIP: i32 = RAINDROP_HEIGHT / 3;

/// Rows taken by the raindrop's elliptical base
const RAINDROP_BASE: i32 = RAINDROP_HEIGHT - RAINDROP_TIP;

/// Point at `distance` from `(cx, cy)` along `degrees`, truncated toward zero
fn polar(cx: i32, cy: i32, distance: f32, degrees: u16) -> (i32, i32) {
    let theta = (degrees as f32).to_radians();
    (
        cx.saturating_add((distance * libm::cosf(theta)) as i32),
        cy.saturating_add((distance * libm::sinf(theta)) as i32),
    )
}

/// The 360 ring samples of a sun, one per degree
///
/// Angle-uniform sampling: large rings leave gaps, small rings repeat
/// pixels.
pub fn sun_ring_points(cx: i32, cy: i32, radius: i32) -> impl Iterator<Item = (i32, i32)> {
    (0..360u16).map(move |deg| polar(cx, cy, radius as f32, deg))
}

/// Draw a sun: a ring of `radius` around `(cx, cy)` plus 12 rays
pub fn draw_sun<const W: usize, const H: usize>(
    canvas: &mut Canvas<W, H>,
    cx: i32,
    cy: i32,
    radius: i32,
) {
    for (x, y) in sun_ring_points(cx, cy, radius) {
        canvas.set(x, y);
    }

    let steps = SUN_RAY_LENGTH;
    for ray in 0..SUN_RAYS {
        let degrees = ray * (360 / SUN_RAYS);
        let (x0, y0) = polar(cx, cy, radius as f32, degrees);
        let (x1, y1) = polar(cx, cy, radius.saturating_add(SUN_RAY_LENGTH) as f32, degrees);

        // Integer interpolation; short diagonal rays come out uneven
        for i in 0..=steps {
            canvas.set(lerp(x0, x1, i, steps), lerp(y0, y1, i, steps));
        }
    }
}

/// `from + (to - from) * i / steps`, truncating like integer division
///
/// Evaluated in `i64`; the result lies between `from` and `to`.
fn lerp(from: i32, to: i32, i: i32, steps: i32) -> i32 {
    let (from, to) = (i64::from(from), i64::from(to));
    let value = from + (to - from) * i64::from(i) / i64::from(steps);
    i32::try_from(value).unwrap_or(if to < from { i32::MIN } else { i32::MAX })
}

/// Half-width of the raindrop silhouette at footprint row `row`
fn raindrop_reach(row: i32) -> f32 {
    let half = RAINDROP_WIDTH as f32 / 2.0;
    if row < RAINDROP_TIP {
        row as f32 / RAINDROP_TIP as f32 * half
    } else {
        let t = (row - RAINDROP_TIP) as f32 / RAINDROP_BASE as f32;
        half * libm::sqrtf(1.0 - t * t)
    }
}

/// Draw a filled raindrop with its footprint's top-left corner at `(x, y)`
///
/// The footprint is 20x27: a triangle tip over the top third and a half
/// ellipse below it. Membership is tested at pixel centres so the drop is
/// mirror-symmetric.
pub fn draw_raindrop<const W: usize, const H: usize>(canvas: &mut Canvas<W, H>, x: i32, y: i32) {
    let half = RAINDROP_WIDTH as f32 / 2.0;
    for row in 0..RAINDROP_HEIGHT {
        let reach = raindrop_reach(row);
        for col in 0..RAINDROP_WIDTH {
            let dx = libm::fabsf(col as f32 + 0.5 - half);
            if dx <= reach {
                canvas.set(x.saturating_add(col), y.saturating_add(row));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_count<const W: usize, const H: usize>(canvas: &Canvas<W, H>, y: i32) -> usize {
        (0..W as i32).filter(|&x| canvas.is_set(x, y)).count()
    }

    #[test]
    fn test_ring_samples_lie_on_radius() {
        for radius in [3, 8, 15] {
            for (x, y) in sun_ring_points(50, 40, radius) {
                let (dx, dy) = ((x - 50) as f32, (y - 40) as f32);
                let distance = libm::roundf(libm::sqrtf(dx * dx + dy * dy)) as i32;
                assert!((distance - radius).abs() <= 1);
            }
        }
    }

    #[test]
    fn test_sun_axis_rays() {
        let mut canvas = Canvas::<64, 64>::new();
        draw_sun(&mut canvas, 32, 32, 10);

        // Horizontal and vertical rays reach radius + 4
        for d in 10..=14 {
            assert!(canvas.is_set(32 + d, 32));
            assert!(canvas.is_set(32 - d, 32));
            assert!(canvas.is_set(32, 32 + d));
            assert!(canvas.is_set(32, 32 - d));
        }
        assert!(!canvas.is_set(32 + 15, 32));
        // Ring is hollow
        assert!(!canvas.is_set(32, 32));
    }

    #[test]
    fn test_sun_stays_within_ray_reach() {
        let mut canvas = Canvas::<64, 64>::new();
        draw_sun(&mut canvas, 32, 32, 8);
        for y in 0..64 {
            for x in 0..64 {
                if canvas.is_set(x, y) {
                    let (dx, dy) = (x - 32, y - 32);
                    assert!(dx * dx + dy * dy <= 12 * 12);
                }
            }
        }
    }

    #[test]
    fn test_sun_clips_at_corner() {
        let mut canvas = Canvas::<16, 16>::new();
        draw_sun(&mut canvas, 0, 0, 6);
        assert!(canvas.is_set(6, 0));
        assert!(canvas.is_set(0, 6));
        assert!(canvas.set_pixel_count() > 0);
    }

    #[test]
    fn test_raindrop_profile() {
        let mut canvas = Canvas::<32, 32>::new();
        draw_raindrop(&mut canvas, 0, 0);

        assert_eq!(row_count(&canvas, 0), 0); // apex has zero width
        assert_eq!(row_count(&canvas, 1), 2);
        assert_eq!(row_count(&canvas, RAINDROP_TIP), 20); // widest row
        assert_eq!(row_count(&canvas, RAINDROP_HEIGHT - 1), 6);
        assert_eq!(row_count(&canvas, RAINDROP_HEIGHT), 0);
    }

    #[test]
    fn test_raindrop_footprint() {
        let mut canvas = Canvas::<40, 40>::new();
        draw_raindrop(&mut canvas, 5, 5);
        for y in 0..40 {
            for x in 0..40 {
                if canvas.is_set(x, y) {
                    assert!((5..5 + RAINDROP_WIDTH).contains(&x));
                    assert!((5..5 + RAINDROP_HEIGHT).contains(&y));
                }
            }
        }
    }

    #[test]
    fn test_raindrop_is_symmetric() {
        let mut canvas = Canvas::<20, 27>::new();
        draw_raindrop(&mut canvas, 0, 0);
        for y in 0..RAINDROP_HEIGHT {
            for x in 0..RAINDROP_WIDTH {
                assert_eq!(
                    canvas.is_set(x, y),
                    canvas.is_set(RAINDROP_WIDTH - 1 - x, y)
                );
            }
        }
    }
}
