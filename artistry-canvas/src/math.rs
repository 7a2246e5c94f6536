//! Interpolation and range helpers.

use crate::color::Color;

/// Linear interpolation: `amt * (stop - start) + start`.
pub fn lerp(start: f64, stop: f64, amt: f64) -> f64 {
    amt * (stop - start) + start
}

/// Interpolation running from `stop` (at 0) back to `start` (at 1).
///
/// This is `amt * (start - stop) + stop`, i.e. `lerp(stop, start, amt)`. It
/// does not invert [`lerp`].
pub fn inv_lerp(start: f64, stop: f64, amt: f64) -> f64 {
    amt * (start - stop) + stop
}

/// Blend two colors channel by channel in RGBA space.
///
/// `amt` is clamped to `[0, 1]` and each channel is truncated toward zero.
/// An absent color contributes transparent black.
pub fn lerp_color(c1: Color, c2: Color, amt: f64) -> Color {
    let amt = amt.clamp(0.0, 1.0);
    let a = c1.to_rgba().map(|c| c.to_array()).unwrap_or([0; 4]);
    let b = c2.to_rgba().map(|c| c.to_array()).unwrap_or([0; 4]);
    let ch = |i: usize| lerp(a[i] as f64, b[i] as f64, amt) as u8;
    Color::rgba8(ch(0), ch(1), ch(2), ch(3))
}

/// Rescale `value` from `[start1, stop1]` to `[start2, stop2]`.
///
/// With `within_bounds` the result is held between `start2` and `stop2`
/// whichever way round they are. `start1 == stop1` divides by zero and
/// yields an infinite or NaN result.
pub fn remap(
    value: f64,
    start1: f64,
    stop1: f64,
    start2: f64,
    stop2: f64,
    within_bounds: bool,
) -> f64 {
    let mapped = start2 + (stop2 - start2) * ((value - start1) / (stop1 - start1));
    if !within_bounds {
        return mapped;
    }
    if start2 < stop2 {
        mapped.min(stop2).max(start2)
    } else {
        mapped.min(start2).max(stop2)
    }
}

/// Clamp `value` to `[low, high]`.
pub fn constrain(value: f64, low: f64, high: f64) -> f64 {
    value.max(low).min(high)
}

/// Euclidean distance between two points.
pub fn dist(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt()
}

pub fn radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

pub fn degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use rstest::rstest;

    #[test]
    fn test_lerp_and_inv_lerp() {
        assert_eq!(lerp(10.0, 20.0, 0.25), 12.5);
        assert_eq!(inv_lerp(10.0, 20.0, 0.25), 17.5);
        assert_eq!(inv_lerp(10.0, 20.0, 0.0), 20.0);
        assert_eq!(inv_lerp(10.0, 20.0, 1.0), 10.0);
    }

    #[test]
    fn test_lerp_color_endpoints_and_clamp() {
        let c1 = Color::rgba8(10, 20, 30, 255);
        let c2 = Color::rgba8(110, 220, 0, 55);
        assert_eq!(lerp_color(c1, c2, 0.0).to_rgba(), c1.to_rgba());
        assert_eq!(lerp_color(c1, c2, 1.0).to_rgba(), c2.to_rgba());
        assert_eq!(lerp_color(c1, c2, -3.0).to_rgba(), c1.to_rgba());
        assert_eq!(lerp_color(c1, c2, 7.0).to_rgba(), c2.to_rgba());
        assert_eq!(
            lerp_color(c1, c2, 0.5).to_rgba(),
            Some(Rgba::from_rgba8(60, 120, 15, 155))
        );
    }

    #[test]
    fn test_lerp_color_with_itself() {
        let c = Color::from_channels(crate::ColorMode::Hsb, [200.0, 60.0, 80.0], 200.0, 100.0);
        for t in [0.0, 0.3, 0.77, 1.0] {
            assert_eq!(lerp_color(c, c, t).to_rgba(), c.to_rgba());
        }
    }

    #[test]
    fn test_lerp_color_truncates() {
        let c = lerp_color(Color::gray(0), Color::gray(3), 0.5);
        assert_eq!(c.to_rgba(), Some(Rgba::from_rgba8(1, 1, 1, 255)));
    }

    #[rstest]
    #[case(5.0, 0.0, 10.0, 0.0, 100.0, false, 50.0)]
    #[case(-5.0, 0.0, 10.0, 0.0, 100.0, true, 0.0)]
    #[case(-5.0, 0.0, 10.0, 0.0, 100.0, false, -50.0)]
    #[case(15.0, 0.0, 10.0, 100.0, 0.0, true, 0.0)]
    #[case(-5.0, 0.0, 10.0, 100.0, 0.0, true, 100.0)]
    #[case(2.0, 0.0, 10.0, 100.0, 0.0, false, 80.0)]
    fn test_remap(
        #[case] value: f64,
        #[case] start1: f64,
        #[case] stop1: f64,
        #[case] start2: f64,
        #[case] stop2: f64,
        #[case] within_bounds: bool,
        #[case] expected: f64,
    ) {
        assert_eq!(
            remap(value, start1, stop1, start2, stop2, within_bounds),
            expected
        );
    }

    #[test]
    fn test_remap_empty_source_range() {
        assert!(remap(1.0, 3.0, 3.0, 0.0, 1.0, false).is_infinite());
        assert!(remap(3.0, 3.0, 3.0, 0.0, 1.0, false).is_nan());
    }

    #[test]
    fn test_constrain_and_dist() {
        assert_eq!(constrain(5.0, 0.0, 3.0), 3.0);
        assert_eq!(constrain(-1.0, 0.0, 3.0), 0.0);
        assert_eq!(dist(0.0, 0.0, 3.0, 4.0), 5.0);
        assert!((radians(180.0) - std::f64::consts::PI).abs() < 1e-12);
        assert!((degrees(std::f64::consts::FRAC_PI_2) - 90.0).abs() < 1e-12);
    }
}
