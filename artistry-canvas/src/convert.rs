//! Color-space conversions between HSB/HSL and 8-bit RGB.
//!
//! Hue is in degrees and wrapped into `[0, 360)`. Saturation, brightness and
//! lightness are fractions in `[0, 1]`. Results are truncated toward zero, so
//! a round trip through these functions can drift by one step per channel.

/// Pick the `(r', g', b')` chroma arrangement for the 60° sector holding `h`.
///
/// Sectors are half-open, so a hue exactly on a boundary falls into the
/// lower sector (`60.0` is in `[60, 120)`, not `[0, 60)`).
fn sector(h: f64, c: f64, x: f64) -> (f64, f64, f64) {
    match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    }
}

fn to_channel(v: f64) -> u8 {
    // `as` truncates toward zero and saturates out-of-range values
    (v * 255.0) as u8
}

/// Secondary chroma component shared by both conversions.
fn secondary(h: f64, c: f64) -> f64 {
    c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs())
}

/// Convert hue/saturation/brightness to RGB.
pub fn hsb_to_rgb(h: f64, s: f64, v: f64) -> (u8, u8, u8) {
    let h = h.rem_euclid(360.0);
    let c = v * s;
    let x = secondary(h, c);
    let m = v - c;

    let (r, g, b) = sector(h, c, x);
    (to_channel(r + m), to_channel(g + m), to_channel(b + m))
}

/// Convert hue/saturation/lightness to RGB.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let h = h.rem_euclid(360.0);
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = secondary(h, c);
    let m = l - c / 2.0;

    let (r, g, b) = sector(h, c, x);
    (to_channel(r + m), to_channel(g + m), to_channel(b + m))
}

/// Hue in degrees of an RGB triple with the given max/min/chroma.
fn hue(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    if delta == 0.0 {
        return 0.0;
    }
    let h = if max == r {
        60.0 * (((g - b) / delta) % 6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    h.rem_euclid(360.0)
}

/// Convert 8-bit RGB to `(hue, saturation, brightness)`.
pub fn rgb_to_hsb(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let (r, g, b) = (r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max == 0.0 { 0.0 } else { delta / max };
    (hue(r, g, b, max, delta), s, max)
}

/// Convert 8-bit RGB to `(hue, saturation, lightness)`.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let (r, g, b) = (r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    let s = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };
    (hue(r, g, b, max, delta), s, l)
}
