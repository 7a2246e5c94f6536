//! Resolution of positional shape arguments into device-independent points.

use crate::style::ShapeMode;
use std::f64::consts::{FRAC_PI_2, PI};

/// A 2D point `(x, y)`.
pub type Point = (f64, f64);

/// Line segments used to flatten each quarter-circle corner of a rounded rect.
const ARC_SEGMENTS: usize = 8;

/// Corners of a rectangle, clockwise from `(x, y)`, after applying `mode`.
///
/// Negative sizes are kept as-is: under `Corners` an opposite corner above or
/// left of `(x, y)` yields a negative width or height.
pub fn rect_corners(mode: ShapeMode, x: f64, y: f64, w: f64, h: f64) -> [Point; 4] {
    let (x, y, w, h) = match mode {
        ShapeMode::Corner => (x, y, w, h),
        ShapeMode::Center => (x - w / 2.0, y - h / 2.0, w, h),
        ShapeMode::Radius => (x - w, y - h, w * 2.0, h * 2.0),
        ShapeMode::Corners => (x, y, w - x, h - y),
    };
    [(x, y), (x + w, y), (x + w, y + h), (x, y + h)]
}

/// The two opposite bounding-box corners of an ellipse after applying `mode`.
pub fn ellipse_bounds(mode: ShapeMode, x: f64, y: f64, w: f64, h: f64) -> [Point; 2] {
    match mode {
        ShapeMode::Center => {
            let (hw, hh) = ((w / 2.0).floor(), (h / 2.0).floor());
            [(x - hw, y - hh), (x + hw, y + hh)]
        }
        ShapeMode::Radius => [(x - w, y - h), (x + w, y + h)],
        ShapeMode::Corner => [(x, y), (x + w, y + h)],
        ShapeMode::Corners => [(x, y), (w, h)],
    }
}

/// Normalize two corners into `(left, top, right, bottom)`.
pub fn normalize_bounds([(x0, y0), (x1, y1)]: [Point; 2]) -> (f64, f64, f64, f64) {
    (x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1))
}

/// Outline of a rectangle with rounded corners as a closed polygon.
///
/// `(x, y, w, h)` are already resolved to corner form. The radius is clamped
/// to `[0, min(|w|, |h|) / 2]`; a zero radius gives the four plain corners.
pub fn rounded_rect_outline(x: f64, y: f64, w: f64, h: f64, radius: f64) -> Vec<Point> {
    let (left, top, right, bottom) = normalize_bounds([(x, y), (x + w, y + h)]);
    let max_radius = (right - left).min(bottom - top) / 2.0;
    let r = if radius.is_finite() {
        radius.clamp(0.0, max_radius)
    } else {
        0.0
    };

    if r == 0.0 {
        return vec![(left, top), (right, top), (right, bottom), (left, bottom)];
    }

    // Corner centers paired with the angle their quarter arc starts at (y-down)
    let corners = [
        ((right - r, top + r), -FRAC_PI_2),
        ((right - r, bottom - r), 0.0),
        ((left + r, bottom - r), FRAC_PI_2),
        ((left + r, top + r), PI),
    ];

    let mut points = Vec::with_capacity(corners.len() * (ARC_SEGMENTS + 1));
    for ((cx, cy), start) in corners {
        for i in 0..=ARC_SEGMENTS {
            let theta = start + FRAC_PI_2 * i as f64 / ARC_SEGMENTS as f64;
            points.push((cx + r * theta.cos(), cy + r * theta.sin()));
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ShapeMode::Corner, [(100.0, 100.0), (140.0, 100.0), (140.0, 120.0), (100.0, 120.0)])]
    #[case(ShapeMode::Center, [(80.0, 90.0), (120.0, 90.0), (120.0, 110.0), (80.0, 110.0)])]
    #[case(ShapeMode::Radius, [(60.0, 80.0), (140.0, 80.0), (140.0, 120.0), (60.0, 120.0)])]
    #[case(ShapeMode::Corners, [(100.0, 100.0), (40.0, 100.0), (40.0, 20.0), (100.0, 20.0)])]
    fn test_rect_corners_per_mode(#[case] mode: ShapeMode, #[case] expected: [Point; 4]) {
        assert_eq!(rect_corners(mode, 100.0, 100.0, 40.0, 20.0), expected);
    }

    #[test]
    fn test_corners_mode_keeps_negative_size() {
        let [tl, tr, br, _] = rect_corners(ShapeMode::Corners, 100.0, 100.0, 40.0, 20.0);
        assert_eq!(tr.0 - tl.0, -60.0);
        assert_eq!(br.1 - tl.1, -80.0);
    }

    #[rstest]
    #[case(ShapeMode::Center, [(85.0, 95.0), (115.0, 105.0)])]
    #[case(ShapeMode::Radius, [(69.0, 89.0), (131.0, 111.0)])]
    #[case(ShapeMode::Corner, [(100.0, 100.0), (131.0, 111.0)])]
    #[case(ShapeMode::Corners, [(100.0, 100.0), (31.0, 11.0)])]
    fn test_ellipse_bounds_per_mode(#[case] mode: ShapeMode, #[case] expected: [Point; 2]) {
        // Odd sizes show the floor division used for the centered box
        assert_eq!(ellipse_bounds(mode, 100.0, 100.0, 31.0, 11.0), expected);
    }

    #[test]
    fn test_normalize_bounds() {
        assert_eq!(
            normalize_bounds([(10.0, 40.0), (-5.0, 2.0)]),
            (-5.0, 2.0, 10.0, 40.0)
        );
    }

    #[test]
    fn test_rounded_rect_zero_radius_is_plain() {
        assert_eq!(
            rounded_rect_outline(0.0, 0.0, 10.0, 5.0, 0.0),
            vec![(0.0, 0.0), (10.0, 0.0), (10.0, 5.0), (0.0, 5.0)]
        );
    }

    #[test]
    fn test_rounded_rect_stays_inside_box() {
        let pts = rounded_rect_outline(170.0, 350.0, 60.0, 20.0, 5.0);
        assert_eq!(pts.len(), 4 * (ARC_SEGMENTS + 1));
        for &(x, y) in &pts {
            assert!((170.0 - 1e-9..=230.0 + 1e-9).contains(&x));
            assert!((350.0 - 1e-9..=370.0 + 1e-9).contains(&y));
        }
        // First arc starts on the top edge, just left of the top-right corner
        assert!((pts[0].0 - 225.0).abs() < 1e-9);
        assert!((pts[0].1 - 350.0).abs() < 1e-9);
    }

    #[test]
    fn test_rounded_rect_radius_is_clamped() {
        let pts = rounded_rect_outline(0.0, 0.0, 20.0, 10.0, 100.0);
        // Clamped to 5: the top-right arc starts at x = 20 - 5
        assert!((pts[0].0 - 15.0).abs() < 1e-9);
        let (min_y, max_y) = pts
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(p.1), hi.max(p.1)));
        assert!(min_y >= -1e-9 && max_y <= 10.0 + 1e-9);
    }
}
